//! Typed view of one Kinesis record, built from the raw event at decode time.
//!
//! Keys not listed here are ignored; the raw event is what gets logged.

use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StreamRecord {
    #[serde(default)]
    pub kinesis: Option<KinesisPayload>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KinesisPayload {
    #[serde(default)]
    pub sequence_number: Option<String>,
    /// Base64 encoded record payload.
    #[serde(default)]
    pub data: Option<String>,
}

impl StreamRecord {
    pub fn payload(&self) -> Option<&str> {
        self.kinesis.as_ref()?.data.as_deref()
    }

    pub fn sequence_number(&self) -> Option<&str> {
        self.kinesis.as_ref()?.sequence_number.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_lambda_record() {
        let record: StreamRecord = serde_json::from_value(json!({
            "kinesis": {
                "kinesisSchemaVersion": "1.0",
                "partitionKey": "1",
                "sequenceNumber": "49590338271490256608559692538361571095921575989136588898",
                "data": "SGVsbG8sIHRoaXMgaXMgYSB0ZXN0Lg==",
                "approximateArrivalTimestamp": 1545084650.987,
                "encryptionType": "NONE"
            },
            "eventSource": "aws:kinesis",
            "eventID": "shardId-000000000006:49590338271490256608559692538361571095921575989136588898",
            "awsRegion": "us-east-2",
            "eventSourceARN": "arn:aws:kinesis:us-east-2:123456789012:stream/lambda-stream"
        }))
        .unwrap();
        assert_eq!(record.payload(), Some("SGVsbG8sIHRoaXMgaXMgYSB0ZXN0Lg=="));
        assert_eq!(
            record.sequence_number(),
            Some("49590338271490256608559692538361571095921575989136588898")
        );
    }

    #[test]
    fn test_missing_nested_fields() {
        let bare: StreamRecord = serde_json::from_value(json!({})).unwrap();
        assert_eq!(bare.payload(), None);
        let empty: StreamRecord = serde_json::from_value(json!({ "kinesis": {} })).unwrap();
        assert_eq!(empty.payload(), None);
    }

    #[test]
    fn test_wrong_shapes_are_rejected() {
        for value in [
            json!(null),
            json!({ "kinesis": "oops" }),
            json!({ "kinesis": { "data": 5 } }),
        ] {
            assert!(serde_json::from_value::<StreamRecord>(value).is_err());
        }
    }
}
