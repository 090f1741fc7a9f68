use crate::board::model::Stroke;

/// Serialize committed strokes as the ordered `{color, points}` record list
/// the eventual backend hand-off expects.
pub fn history_payload(strokes: &[Stroke]) -> serde_json::Value {
    serde_json::to_value(strokes).unwrap_or_else(|_| serde_json::Value::Array(Vec::new()))
}

/// Placeholder for the outbound send action. There is no wire format or
/// target yet; the payload is built and logged so the shape is exercised.
pub fn send(strokes: &[Stroke]) {
    let payload = history_payload(strokes);
    let bytes = payload.to_string().len();
    tracing::info!(strokes = strokes.len(), bytes, "send is not wired up yet");
}
