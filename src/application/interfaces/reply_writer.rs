/// Produces a reply locally, without any model, when every provider failed.
pub trait ReplyWriter: Send + Sync {
    fn write(&self, context: &str, message: &str) -> String;
}
