pub trait ConfigProvider {
    fn truncate_max_length(&self) -> i64;
    fn truncate_suffix(&self) -> &str;
    fn message_min_length(&self) -> usize;
    fn max_field_length(&self) -> Option<usize>;
}

/// One step of a [`TransformPipeline`](crate::core::pipeline::TransformPipeline).
pub trait TextTransform: Send + Sync {
    fn name(&self) -> &str;
    fn apply(&self, input: &str) -> String;
}
