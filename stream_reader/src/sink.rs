use lambda_runtime::tracing;

/// Destination for the handler's observability output.
pub(crate) trait LogSink {
    fn event(&self, request_id: &str, serialized: &str);

    fn record(&self, index: usize, sequence_number: Option<&str>, text: &str);
}

/// Writes through `tracing`; the subscriber installed in `main` sends it to stdout.
pub(crate) struct TracingSink;

impl LogSink for TracingSink {
    fn event(&self, request_id: &str, serialized: &str) {
        tracing::info!(request_id, event = serialized, "Received event");
    }

    fn record(&self, index: usize, sequence_number: Option<&str>, text: &str) {
        tracing::info!(index, sequence_number, "{}", text);
    }
}
