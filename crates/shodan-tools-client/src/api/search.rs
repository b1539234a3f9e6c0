//! Host search endpoints.

use shodan_tools_core::{
    ApiHost, Auth, EndpointDescriptor, HttpMethod, Literal, ParamSpec, ParamType,
};

const FACETS_DESCRIPTION: &str =
    "A comma-separated list of properties to get summary information on.";

/// `GET /shodan/host/{ip}`
pub const GET_HOST_INFO: EndpointDescriptor = EndpointDescriptor {
    name: "get_host_info",
    description: "Retrieve information about a specific host from Shodan.",
    action: "retrieving host information",
    host: ApiHost::Api,
    method: HttpMethod::Get,
    path: "/shodan/host/{ip}",
    auth: Auth::ApiKey,
    params: &[
        ParamSpec::path("ip", "The IP address of the host to retrieve information for."),
        ParamSpec::query(
            "history",
            ParamType::Boolean,
            "True if all historical banners should be returned.",
        )
        .default_value(Literal::Bool(false)),
        ParamSpec::query(
            "minify",
            ParamType::Boolean,
            "True to only return the list of ports and general host information, no banners.",
        )
        .default_value(Literal::Bool(false)),
    ],
};

/// `GET /shodan/host/search`
pub const SEARCH_SHODAN: EndpointDescriptor = EndpointDescriptor {
    name: "search_shodan",
    description: "Search Shodan using the provided query and facets.",
    action: "searching Shodan",
    host: ApiHost::Api,
    method: HttpMethod::Get,
    path: "/shodan/host/search",
    auth: Auth::ApiKey,
    params: &[
        ParamSpec::query("query", ParamType::String, "The Shodan search query.").required(),
        ParamSpec::query("facets", ParamType::String, FACETS_DESCRIPTION),
        ParamSpec::query(
            "page",
            ParamType::Integer,
            "The page number to page through results.",
        )
        .default_value(Literal::Int(1)),
    ],
};

/// `GET /shodan/host/count`, a search that returns totals and facets only
pub const SEARCH_SHODAN_HOST_COUNT: EndpointDescriptor = EndpointDescriptor {
    name: "search_shodan_host_count",
    description: "Search for host count on Shodan based on a query.",
    action: "searching for Shodan host count",
    host: ApiHost::Api,
    method: HttpMethod::Get,
    path: "/shodan/host/count",
    auth: Auth::ApiKey,
    params: &[
        ParamSpec::query("query", ParamType::String, "The Shodan search query.").required(),
        ParamSpec::query("facets", ParamType::String, FACETS_DESCRIPTION),
    ],
};

/// `GET /shodan/host/search/facets`
pub const LIST_SEARCH_FACETS: EndpointDescriptor = EndpointDescriptor {
    name: "list_search_facets",
    description: "List all search facets from Shodan.",
    action: "listing search facets",
    host: ApiHost::Api,
    method: HttpMethod::Get,
    path: "/shodan/host/search/facets",
    auth: Auth::ApiKey,
    params: &[],
};

/// `GET /shodan/host/search/filters`
pub const LIST_SEARCH_FILTERS: EndpointDescriptor = EndpointDescriptor {
    name: "list_search_filters",
    description: "List all filters that can be used when searching on Shodan.",
    action: "listing search filters",
    host: ApiHost::Api,
    method: HttpMethod::Get,
    path: "/shodan/host/search/filters",
    auth: Auth::ApiKey,
    params: &[],
};

/// `GET /shodan/host/search/tokens`
pub const BREAK_SEARCH_QUERY_INTO_TOKENS: EndpointDescriptor = EndpointDescriptor {
    name: "break_search_query_into_tokens",
    description: "Break the search query into tokens using the Shodan API.",
    action: "breaking the search query into tokens",
    host: ApiHost::Api,
    method: HttpMethod::Get,
    path: "/shodan/host/search/tokens",
    auth: Auth::ApiKey,
    params: &[ParamSpec::query("query", ParamType::String, "The Shodan search query.").required()],
};
