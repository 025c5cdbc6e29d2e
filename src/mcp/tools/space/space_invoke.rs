use std::sync::Arc;

use crate::mcp::SpaceArgs;
use crate::models::SpaceResult;
use crate::services::ProgressReporter;
use crate::SpaceError;

use super::SpaceRouter;

const MISSING_SPACE_NAME: &str = r#"Error: Missing required parameter: "space_name"

Example:
```json
{
  "operation": "invoke",
  "space_name": "username/space-name",
  "parameters": "{\"param1\": \"value1\"}"
}
```"#;

fn missing_parameters(space_name: &str) -> String {
    format!(
        r#"Error: Missing required parameter: "parameters"

The "parameters" field must be a JSON object string containing the space parameters.

Example:
```json
{{
  "operation": "invoke",
  "space_name": "{}",
  "parameters": "{{\"param1\": \"value1\", \"param2\": 42}}"
}}
```

Use "view_parameters" to see what parameters this space accepts."#,
        space_name
    )
}

impl SpaceRouter {
    pub(crate) async fn handle_invoke(
        &self,
        args: &SpaceArgs,
        progress: Arc<dyn ProgressReporter>,
    ) -> Result<SpaceResult, SpaceError> {
        let Some(space_name) = args.space_name() else {
            return Ok(SpaceResult::error(MISSING_SPACE_NAME));
        };
        let Some(parameters) = args.parameters() else {
            return Ok(SpaceResult::error(missing_parameters(space_name)));
        };

        self.services
            .invoke
            .invoke_space(space_name, parameters, self.token(), progress)
            .await
    }
}
