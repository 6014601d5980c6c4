use lambda_runtime::{Error, LambdaEvent};
use serde::Deserialize;
use serde_json::Value;

use crate::decode::{decode_payload, payload_text};
use crate::error::HandlerError;
use crate::model::StreamRecord;
use crate::sink::LogSink;

fn decode_record(index: usize, raw: &Value) -> Result<(StreamRecord, Vec<u8>), HandlerError> {
    let record = StreamRecord::deserialize(raw)
        .map_err(|source| HandlerError::MalformedRecord { index, source })?;
    if record.kinesis.is_none() {
        return Err(HandlerError::MissingField { index, field: "kinesis" });
    }
    let data = record.payload().ok_or(HandlerError::MissingField {
        index,
        field: "kinesis.data",
    })?;
    let bytes =
        decode_payload(data).map_err(|source| HandlerError::InvalidBase64 { index, source })?;
    Ok((record, bytes))
}

fn process_records<S: LogSink>(sink: &S, event: &Value) -> Result<(), HandlerError> {
    let records = event
        .get("Records")
        .and_then(Value::as_array)
        .ok_or(HandlerError::MissingRecords)?;
    for (index, raw) in records.iter().enumerate() {
        let (record, bytes) = decode_record(index, raw)?;
        sink.record(index, record.sequence_number(), &payload_text(&bytes));
    }
    Ok(())
}

/// Logs the event as delivered, then each record's decoded payload in order.
pub(crate) async fn function_handler<S: LogSink>(
    event: LambdaEvent<Value>,
    sink: &S,
) -> Result<(), Error> {
    let payload = event.payload;
    let serialized = serde_json::to_string(&payload).map_err(HandlerError::from)?;
    sink.event(&event.context.request_id, &serialized);
    process_records(sink, &payload)?;
    Ok(())
}
