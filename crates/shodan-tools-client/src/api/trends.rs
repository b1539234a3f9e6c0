//! Trends API endpoints, served from `trends.shodan.io`.

use shodan_tools_core::{ApiHost, Auth, EndpointDescriptor, HttpMethod, ParamSpec, ParamType};

/// `GET /api/v1/search/facets`
pub const LIST_TRENDS_SEARCH_FACETS: EndpointDescriptor = EndpointDescriptor {
    name: "list_trends_search_facets",
    description: "List all search facets from the Shodan Trends API.",
    action: "listing search facets",
    host: ApiHost::Trends,
    method: HttpMethod::Get,
    path: "/api/v1/search/facets",
    auth: Auth::ApiKey,
    params: &[],
};

/// `GET /api/v1/search`
pub const SEARCH_TRENDS: EndpointDescriptor = EndpointDescriptor {
    name: "search_trends",
    description: "Get breakdown of historical results aggregate by facet field.",
    action: "searching for trends",
    host: ApiHost::Trends,
    method: HttpMethod::Get,
    path: "/api/v1/search",
    auth: Auth::ApiKey,
    params: &[
        ParamSpec::query(
            "query",
            ParamType::String,
            "The search query used to search the historical database.",
        )
        .required(),
        ParamSpec::query(
            "facets",
            ParamType::String,
            "A comma-separated list of properties to get summary information on.",
        ),
    ],
};
