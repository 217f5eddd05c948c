//! Public api types.

/// Pod is a single deployable unit of containers.
pub struct Pod {
    /// name of the pod, unique within its namespace.
    pub name: String,
    /// Restarts counted across all containers.
    pub restarts: u32,
    /// How the scheduler should place the pod.
    pub strategy: String,
    pub labels: Vec<String>,
}

/// Volume is a named storage mount.
pub struct Volume {
    /// `path` where the volume is mounted inside the container.
    pub path: String,
    /// `Kind` of the backing storage.
    pub kind: String,
}
