//! Side-by-side directions for two travel modes

use domain::{TravelMode, ValidationError};
use tracing::{debug, instrument};

use crate::client::DirectionsClient;
use crate::error::DirectionsError;
use crate::models::ModeComparison;
use crate::request::{DirectionsRequest, MODE_MESSAGE, normalize_mode};

/// Fetch the same route for the request's mode and an alternate mode
///
/// Both modes are checked before any call is made. The calls run one after
/// the other with only the mode changed; if either fails, the error is
/// returned and no partial result is kept.
#[instrument(skip(client, request), fields(mode = %request.mode))]
pub async fn compare_modes<C>(
    client: &C,
    request: DirectionsRequest,
    alternate: &str,
) -> Result<ModeComparison, DirectionsError>
where
    C: DirectionsClient + ?Sized,
{
    let primary_mode =
        normalize_mode(&request.mode).ok_or_else(|| ValidationError::new("mode", MODE_MESSAGE))?;
    let alternate_mode = TravelMode::normalize(alternate)
        .ok_or_else(|| ValidationError::new("compare", MODE_MESSAGE))?;
    if alternate_mode == primary_mode {
        return Err(ValidationError::new("compare", "must be different from mode").into());
    }

    let alternate_request = request.clone().with_mode(alternate_mode.as_str());
    let primary_request = request.with_mode(primary_mode.as_str());

    let primary = client.directions(primary_request).await?;
    debug!(alternate = %alternate_mode, "Primary directions received, requesting alternate");
    let alternate = client.directions(alternate_request).await?;

    Ok(ModeComparison { primary, alternate })
}
