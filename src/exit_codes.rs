/// Process exit codes. Any other failure leaves `main` with an error (exit 1).
pub mod exit {
    pub const SUCCESS: i32 = 0;
    pub const CONFIG_FAILURE: i32 = 2;
}
