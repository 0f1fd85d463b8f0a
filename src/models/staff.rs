/// Staff directory row mirrored from the upstream user master.
/// password_hash is a PHC string, never a plaintext password.
#[derive(Debug, Clone)]
pub struct StaffUser {
    pub id: String,
    pub password_hash: String,
    pub staff_level: String,
}
