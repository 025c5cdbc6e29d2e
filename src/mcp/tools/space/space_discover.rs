use crate::config::DATA_SOURCE_ENV;
use crate::models::SpaceResult;
use crate::SpaceError;

use super::SpaceRouter;

impl SpaceRouter {
    pub(crate) async fn handle_discover(&self) -> Result<SpaceResult, SpaceError> {
        // Reachable only when the mode was forced without a data source.
        let Some(source) = self.data_source() else {
            return Ok(SpaceResult::error(format!(
                "Error: {} environment variable is not set.",
                DATA_SOURCE_ENV
            )));
        };

        let summary = self.services.discovery.discover_spaces(source).await?;
        Ok(summary.into())
    }
}
