use crate::mcp::SpaceArgs;
use crate::models::SpaceResult;
use crate::services::search::clamp_requested_limit;
use crate::SpaceError;

use super::SpaceRouter;

impl SpaceRouter {
    pub(crate) async fn handle_find(&self, args: &SpaceArgs) -> Result<SpaceResult, SpaceError> {
        let summary = self
            .services
            .search
            .find_spaces(
                args.search_query(),
                args.limit.map(clamp_requested_limit),
                self.token(),
            )
            .await?;
        Ok(summary.into())
    }
}
