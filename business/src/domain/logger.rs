/// Logging port for domain and application code.
///
/// The catalog loader reports fallbacks at `warn`; use cases log each call at
/// `info` and source details at `debug`.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
