//! Internal mirrors of the api types, mostly undocumented.

pub struct Pod {
    /// Name of the pod.
    pub name: String,
    pub restarts: u32,
    pub strategy: String,
    pub labels: Vec<String>,
}
