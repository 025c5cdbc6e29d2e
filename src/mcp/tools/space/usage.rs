//! Usage text returned when the tool is called without an operation.

pub const STANDARD_USAGE: &str = r#"# Gradio Space Interaction

Use any MCP-enabled Gradio Space on demand: search for spaces, read a space's parameter schema, and invoke it.

## Supported Schema Types

Spaces whose first tool takes simple inputs work best:
- Strings, numbers, booleans
- Enums (fixed sets of values)
- Arrays of primitives
- Shallow objects (one level deep)
- Files, passed as URL strings

Spaces with more complex schemas can be added directly from huggingface.co/settings/mcp.

## Operations

### find
Search MCP-enabled Spaces by task or meaning.

```json
{
  "operation": "find",
  "search_query": "image generation",
  "limit": 10
}
```

### view_parameters
Show the parameter schema of a space's first tool.

```json
{
  "operation": "view_parameters",
  "space_name": "evalstate/FLUX1_schnell"
}
```

### invoke
Run a space's first tool. `parameters` is a JSON object encoded as a string.

```json
{
  "operation": "invoke",
  "space_name": "evalstate/FLUX1_schnell",
  "parameters": "{\"prompt\": \"a cute cat\", \"num_steps\": 4}"
}
```

## Workflow

1. `find` spaces suited to the task
2. `view_parameters` to see what the chosen space accepts
3. `invoke` it with those parameters

## Files

Parameters that take files accept a public http(s) URL, for example `{"image": "https://example.com/photo.jpg"}`. Output URLs from one space can be fed to another.

## Tips

- Search for concrete tasks ("video generation", "object detection")
- Defaults are applied for optional parameters you leave out
- Unknown parameters are passed through with a warning
- `view_parameters` lists the allowed values of enum parameters
- Required parameters are checked before the space is called
"#;

pub const DISCOVER_USAGE: &str = r#"# Gradio Space Interaction

Use the curated set of MCP-enabled Gradio Spaces: list them, read a space's parameter schema, and invoke it.

## Supported Schema Types

Spaces whose first tool takes simple inputs work best:
- Strings, numbers, booleans
- Enums (fixed sets of values)
- Arrays of primitives
- Shallow objects (one level deep)
- Files, passed as URL strings

## Operations

### discover
List every space available to this tool.

```json
{
  "operation": "discover"
}
```

### view_parameters
Show the parameter schema of a space's first tool.

```json
{
  "operation": "view_parameters",
  "space_name": "evalstate/FLUX1_schnell"
}
```

### invoke
Run a space's first tool. `parameters` is a JSON object encoded as a string.

```json
{
  "operation": "invoke",
  "space_name": "evalstate/FLUX1_schnell",
  "parameters": "{\"prompt\": \"a cute cat\", \"num_steps\": 4}"
}
```

## Workflow

1. `discover` the available spaces
2. `view_parameters` to see what the chosen space accepts
3. `invoke` it with those parameters

## Files

Parameters that take files accept a public http(s) URL, for example `{"image": "https://example.com/photo.jpg"}`. Output URLs from one space can be fed to another.

## Tips

- Defaults are applied for optional parameters you leave out
- Unknown parameters are passed through with a warning
- `view_parameters` lists the allowed values of enum parameters
- Required parameters are checked before the space is called
"#;
