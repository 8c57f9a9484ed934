//! Decoding a single parcel record.

use serde_json::{Map, Value};

use crate::error::RecordError;
use crate::types::Parcel;

const BOUND_FIELDS: [&str; 6] = ["x1", "y1", "z1", "x2", "y2", "z2"];

/// Decode one element of the `parcels` collection.
///
/// All six bounds are required and must be integer-compatible numbers that
/// fit in an `i32`; integral floats such as `10.0` are accepted. `id` is
/// optional (absent or `null`), but must be integer-compatible when present.
pub fn decode_parcel(value: &Value) -> Result<Parcel, RecordError> {
    let obj = value.as_object().ok_or(RecordError::NotAnObject)?;

    let mut bounds = [0i32; 6];
    for (slot, field) in bounds.iter_mut().zip(BOUND_FIELDS) {
        let raw = obj.get(field).ok_or(RecordError::MissingField(field))?;
        let wide = integer(raw, field)?;
        *slot = i32::try_from(wide).map_err(|_| RecordError::OutOfRange { field })?;
    }

    let [x1, y1, z1, x2, y2, z2] = bounds;
    Ok(Parcel {
        id: decode_id(obj)?,
        x1,
        y1,
        z1,
        x2,
        y2,
        z2,
    })
}

fn decode_id(obj: &Map<String, Value>) -> Result<Option<i64>, RecordError> {
    match obj.get("id") {
        None | Some(Value::Null) => Ok(None),
        Some(raw) => integer(raw, "id").map(Some),
    }
}

fn integer(value: &Value, field: &'static str) -> Result<i64, RecordError> {
    let Value::Number(n) = value else {
        return Err(RecordError::NotAnInteger { field });
    };

    if let Some(v) = n.as_i64() {
        return Ok(v);
    }
    if n.is_u64() {
        return Err(RecordError::OutOfRange { field });
    }

    match n.as_f64() {
        Some(f) if f.fract() == 0.0 => {
            if f < i64::MIN as f64 || f >= i64::MAX as f64 {
                Err(RecordError::OutOfRange { field })
            } else {
                Ok(f as i64)
            }
        }
        _ => Err(RecordError::NotAnInteger { field }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn copies_fields_verbatim() {
        let p = decode_parcel(&json!({"id":1,"x1":0,"y1":0,"z1":0,"x2":10,"y2":5,"z2":20})).unwrap();
        assert_eq!(p, Parcel::new(Some(1), [0, 0, 0], [10, 5, 20]));
    }

    #[test]
    fn id_is_optional() {
        let p = decode_parcel(&json!({"x1":1,"y1":2,"z1":3,"x2":4,"y2":5,"z2":6})).unwrap();
        assert_eq!(p.id, None);

        let p = decode_parcel(&json!({"id":null,"x1":1,"y1":2,"z1":3,"x2":4,"y2":5,"z2":6})).unwrap();
        assert_eq!(p.id, None);
    }

    #[test]
    fn missing_bound_is_reported_not_zeroed() {
        let err = decode_parcel(&json!({"id":1,"x1":0,"y1":0,"z1":0,"x2":10,"z2":20})).unwrap_err();
        assert_eq!(err, RecordError::MissingField("y2"));
    }

    #[test]
    fn rejects_non_numeric_bound() {
        let err = decode_parcel(&json!({"x1":"0","y1":0,"z1":0,"x2":1,"y2":1,"z2":1})).unwrap_err();
        assert_eq!(err, RecordError::NotAnInteger { field: "x1" });
    }

    #[test]
    fn rejects_fractional_bound() {
        let err = decode_parcel(&json!({"x1":0,"y1":0,"z1":0.5,"x2":1,"y2":1,"z2":1})).unwrap_err();
        assert_eq!(err, RecordError::NotAnInteger { field: "z1" });
    }

    #[test]
    fn accepts_integral_float() {
        let p = decode_parcel(&json!({"x1":2.0,"y1":0,"z1":0,"x2":-3.0,"y2":0,"z2":0})).unwrap();
        assert_eq!(p.x1, 2);
        assert_eq!(p.x2, -3);
    }

    #[test]
    fn rejects_bound_outside_i32() {
        let err = decode_parcel(&json!({"x1":0,"y1":0,"z1":0,"x2":4294967296u64,"y2":0,"z2":0})).unwrap_err();
        assert_eq!(err, RecordError::OutOfRange { field: "x2" });
    }

    #[test]
    fn rejects_non_object() {
        assert_eq!(decode_parcel(&json!([1, 2, 3])), Err(RecordError::NotAnObject));
        assert_eq!(decode_parcel(&json!(null)), Err(RecordError::NotAnObject));
    }

    #[test]
    fn rejects_non_integer_id() {
        let err = decode_parcel(&json!({"id":"a","x1":0,"y1":0,"z1":0,"x2":1,"y2":1,"z2":1})).unwrap_err();
        assert_eq!(err, RecordError::NotAnInteger { field: "id" });
    }
}
