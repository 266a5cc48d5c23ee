//! Prediction handler

use axum::{extract::State, Json};

use crate::{AppState, AppResult};
use crate::models::PredictionResponse;
use crate::predictor;
use crate::source::parse_history;

/// Predict the session following the most recent upstream record.
///
/// Any failure (fetch, empty feed, bad record) becomes the fallback body
/// through `AppError`'s response mapping. No retry.
pub async fn next_session(
    State(state): State<AppState>,
) -> AppResult<Json<PredictionResponse>> {
    let payload = state.source.fetch().await?;
    let history = parse_history(payload)?;

    let (prediction, breakdown) = predictor::explain(&state.model, history.outcomes());
    let current = history.current();

    if let Some(b) = breakdown {
        tracing::debug!(
            session = current.session_id,
            records = history.len(),
            window = b.window_len,
            frequency = b.frequency,
            ema = b.ema,
            markov = b.markov,
            score = b.score,
            prediction = %prediction.outcome,
            "Prediction computed"
        );
    }

    Ok(Json(PredictionResponse::new(current, history.next_session_id(), &prediction)))
}
