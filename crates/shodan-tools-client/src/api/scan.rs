//! On-demand scanning endpoints.

use shodan_tools_core::{ApiHost, Auth, EndpointDescriptor, HttpMethod, ParamSpec, ParamType};

/// `GET /shodan/ports`
pub const LIST_SHODAN_PORTS: EndpointDescriptor = EndpointDescriptor {
    name: "list_shodan_ports",
    description: "List all ports that Shodan is crawling on the Internet.",
    action: "listing ports",
    host: ApiHost::Api,
    method: HttpMethod::Get,
    path: "/shodan/ports",
    auth: Auth::ApiKey,
    params: &[],
};

/// `GET /shodan/protocols`
pub const LIST_PROTOCOLS: EndpointDescriptor = EndpointDescriptor {
    name: "list_protocols",
    description: "List all protocols that can be used for on-demand Internet scans via Shodan.",
    action: "listing protocols",
    host: ApiHost::Api,
    method: HttpMethod::Get,
    path: "/shodan/protocols",
    auth: Auth::ApiKey,
    params: &[],
};

/// `POST /shodan/scan`
///
/// Consumes scan credits.
pub const REQUEST_SHODAN_CRAWL: EndpointDescriptor = EndpointDescriptor {
    name: "request_shodan_crawl",
    description: "Request Shodan to crawl an IP or netblock.",
    action: "requesting Shodan to crawl",
    host: ApiHost::Api,
    method: HttpMethod::Post,
    path: "/shodan/scan",
    auth: Auth::ApiKey,
    params: &[ParamSpec::form(
        "ips",
        ParamType::String,
        "A comma-separated list of IPs or netblocks (in CIDR notation) that should get crawled.",
    )
    .required()],
};

/// `POST /shodan/scan/internet`
pub const CRAWL_INTERNET: EndpointDescriptor = EndpointDescriptor {
    name: "crawl_internet",
    description: "Crawl the Internet for a specific port and protocol using Shodan.",
    action: "crawling",
    host: ApiHost::Api,
    method: HttpMethod::Post,
    path: "/shodan/scan/internet",
    auth: Auth::ApiKey,
    params: &[
        ParamSpec::form(
            "port",
            ParamType::Integer,
            "The port that Shodan should crawl the Internet for.",
        )
        .required(),
        ParamSpec::form(
            "protocol",
            ParamType::String,
            "The name of the protocol that should be used to interrogate the port.",
        )
        .required(),
    ],
};

/// `GET /shodan/scans`
pub const GET_SCANS: EndpointDescriptor = EndpointDescriptor {
    name: "get_scans",
    description: "Get a list of all the created scans from Shodan.",
    action: "fetching scans",
    host: ApiHost::Api,
    method: HttpMethod::Get,
    path: "/shodan/scans",
    auth: Auth::ApiKey,
    params: &[],
};

/// `GET /shodan/scans/{id}`
pub const GET_SCAN_STATUS: EndpointDescriptor = EndpointDescriptor {
    name: "get_scan_status",
    description: "Get the status of a scan request on Shodan.",
    action: "getting the scan status",
    host: ApiHost::Api,
    method: HttpMethod::Get,
    path: "/shodan/scans/{id}",
    auth: Auth::ApiKey,
    params: &[ParamSpec::path("id", "The ID of the scan request to check the status of.")],
};
