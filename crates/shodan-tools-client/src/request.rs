//! Turning a descriptor and its arguments into a concrete request.

use shodan_tools_core::{
    ArgValue, EndpointDescriptor, HttpMethod, InvocationArgs, Placement, Result, ToolError,
    API_KEY_PARAM,
};
use tracing::debug;
use url::Url;

/// A fully resolved request, ready to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    /// HTTP method
    pub method: HttpMethod,
    /// Absolute URL including the query string
    pub url: Url,
    /// Form fields, empty unless the method is POST
    pub form: Vec<(String, String)>,
}

/// Resolve `endpoint` against `base_url` with the given arguments
///
/// Required parameters without a value fail here, before anything is sent.
/// `api_key` is appended as the first query term when the endpoint is
/// authenticated; `None` simply leaves it out.
pub fn prepare(
    endpoint: &EndpointDescriptor,
    args: &InvocationArgs,
    base_url: &str,
    api_key: Option<&str>,
) -> Result<PreparedRequest> {
    let mut path_values: Vec<(&str, String)> = Vec::new();
    let mut query: Vec<(&str, String)> = Vec::new();
    let mut form: Vec<(String, String)> = Vec::new();

    if endpoint.requires_key() {
        if let Some(key) = api_key {
            query.push((API_KEY_PARAM, key.to_string()));
        }
    }

    for param in endpoint.params {
        let value = args
            .get(param.name)
            .cloned()
            .or_else(|| param.default.map(ArgValue::from));

        let Some(value) = value else {
            if param.required {
                return Err(ToolError::MissingParameter(param.name.to_string()));
            }
            continue;
        };

        match param.placement {
            Placement::Path => path_values.push((param.name, path_segment(param.name, &value)?)),
            Placement::Query => query.push((param.name, value.render())),
            Placement::Form => form.push((param.name.to_string(), value.render())),
        }
    }

    let ignored: Vec<&str> = args
        .iter()
        .map(|(name, _)| name)
        .filter(|name| *name != API_KEY_PARAM && endpoint.param(name).is_none())
        .collect();
    if !ignored.is_empty() {
        debug!(tool = endpoint.name, ?ignored, "ignoring undeclared arguments");
    }

    let mut url = build_url(base_url, endpoint.path, &path_values)?;
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }

    Ok(PreparedRequest {
        method: endpoint.method,
        url,
        form,
    })
}

/// Render a path value, refusing the dot segments URL normalization removes
fn path_segment(name: &str, value: &ArgValue) -> Result<String> {
    let rendered = value.render();
    if rendered.is_empty() || rendered == "." || rendered == ".." {
        return Err(ToolError::InvalidArgument {
            name: name.to_string(),
            reason: format!("'{rendered}' is not a valid path segment"),
        });
    }
    Ok(rendered)
}

/// Join the path template onto the base URL, substituting placeholders
///
/// Each segment is percent-encoded as a path segment, so a value can never
/// add or drop segments or start a query string.
fn build_url(base_url: &str, template: &str, values: &[(&str, String)]) -> Result<Url> {
    let mut url = Url::parse(base_url)
        .map_err(|e| ToolError::InvalidUrl(format!("'{base_url}': {e}")))?;

    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|()| ToolError::InvalidUrl(format!("'{base_url}' cannot be a base")))?;
        segments.pop_if_empty();
        for segment in template.trim_start_matches('/').split('/') {
            segments.push(&substitute(segment, values));
        }
    }

    Ok(url)
}

fn substitute(segment: &str, values: &[(&str, String)]) -> String {
    values
        .iter()
        .fold(segment.to_string(), |acc, (name, value)| {
            acc.replace(&format!("{{{name}}}"), value)
        })
}
