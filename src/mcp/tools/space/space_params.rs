use crate::mcp::SpaceArgs;
use crate::models::SpaceResult;
use crate::SpaceError;

use super::SpaceRouter;

const MISSING_SPACE_NAME: &str = r#"Error: Missing required parameter: "space_name"

Example:
```json
{
  "operation": "view_parameters",
  "space_name": "username/space-name"
}
```"#;

impl SpaceRouter {
    pub(crate) async fn handle_view_parameters(
        &self,
        args: &SpaceArgs,
    ) -> Result<SpaceResult, SpaceError> {
        let Some(space_name) = args.space_name() else {
            return Ok(SpaceResult::error(MISSING_SPACE_NAME));
        };

        let summary = self
            .services
            .schema
            .view_parameters(space_name, self.token())
            .await?;
        Ok(summary.into())
    }
}
