//! Map hover payloads.
//!
//! Plotly reports hover events as `{"points": [{...}, ...]}`. The map trace
//! puts the point id into `customdata`, so that is the only place the id is
//! read from. `text` carries a display label and never identifies a point.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HoverPayload {
    #[serde(default)]
    pub points: Vec<HoverPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverPoint {
    #[serde(default)]
    pub customdata: Option<serde_json::Value>,

    #[serde(default)]
    pub text: Option<String>,

    #[serde(default)]
    pub point_index: Option<usize>,

    #[serde(default)]
    pub curve_number: Option<usize>,
}

impl HoverPayload {
    /// Point id of the first hovered marker, if any.
    pub fn point_id(&self) -> Option<String> {
        self.points.first().and_then(HoverPoint::point_id)
    }
}

impl HoverPoint {
    pub fn point_id(&self) -> Option<String> {
        let id = match &self.customdata {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(serde_json::Value::Number(n)) => Some(n.to_string()),
            // customdata arrays carry the id first
            Some(serde_json::Value::Array(values)) => values.first().and_then(|v| match v {
                serde_json::Value::String(s) => Some(s.clone()),
                serde_json::Value::Number(n) => Some(n.to_string()),
                _ => None,
            }),
            _ => None,
        };

        id.filter(|id| !id.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plotly_payload() {
        let payload: HoverPayload = serde_json::from_str(
            r#"{"points":[{"curveNumber":0,"pointIndex":3,"lat":41.9,"lon":-74.3,"customdata":"P1","text":"Deciduous Forest"}]}"#,
        )
        .unwrap();
        assert_eq!(payload.point_id().as_deref(), Some("P1"));
        assert_eq!(payload.points[0].point_index, Some(3));
    }

    #[test]
    fn test_numeric_and_array_customdata() {
        let payload: HoverPayload =
            serde_json::from_str(r#"{"points":[{"customdata":[1204, "x"]}]}"#).unwrap();
        assert_eq!(payload.point_id().as_deref(), Some("1204"));
    }

    #[test]
    fn test_text_is_not_an_id() {
        let payload: HoverPayload =
            serde_json::from_str(r#"{"points":[{"pointIndex":0,"text":"Deciduous Forest"}]}"#)
                .unwrap();
        assert_eq!(payload.point_id(), None);

        let blank: HoverPayload =
            serde_json::from_str(r#"{"points":[{"customdata":"  ","text":"P7"}]}"#).unwrap();
        assert_eq!(blank.point_id(), None);

        let empty: HoverPayload = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(empty.point_id(), None);
    }
}
