//! DNS endpoints.

use shodan_tools_core::{ApiHost, Auth, EndpointDescriptor, HttpMethod, ParamSpec, ParamType};

/// `GET /dns/domain/{domain}`
///
/// Uses 1 query credit per lookup.
pub const GET_DOMAIN_INFO: EndpointDescriptor = EndpointDescriptor {
    name: "get_domain_info",
    description: "Get domain information from Shodan.",
    action: "retrieving domain information",
    host: ApiHost::Api,
    method: HttpMethod::Get,
    path: "/dns/domain/{domain}",
    auth: Auth::ApiKey,
    params: &[ParamSpec::path("domain", "The domain to retrieve information for.")],
};

/// `GET /dns/resolve`
pub const DNS_LOOKUP: EndpointDescriptor = EndpointDescriptor {
    name: "dns_lookup",
    description: "Look up the IP address for the provided list of hostnames.",
    action: "performing DNS lookup",
    host: ApiHost::Api,
    method: HttpMethod::Get,
    path: "/dns/resolve",
    auth: Auth::ApiKey,
    params: &[ParamSpec::query(
        "hostnames",
        ParamType::String,
        "Comma-separated list of hostnames to resolve.",
    )
    .required()],
};

/// `GET /dns/reverse`
pub const REVERSE_DNS_LOOKUP: EndpointDescriptor = EndpointDescriptor {
    name: "reverse_dns_lookup",
    description: "Look up the hostnames for the given list of IP addresses.",
    action: "performing reverse DNS lookup",
    host: ApiHost::Api,
    method: HttpMethod::Get,
    path: "/dns/reverse",
    auth: Auth::ApiKey,
    params: &[ParamSpec::query(
        "ips",
        ParamType::String,
        "Comma-separated list of IP addresses to look up.",
    )
    .required()],
};
