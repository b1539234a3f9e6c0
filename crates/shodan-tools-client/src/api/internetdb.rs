//! InternetDB, the free per-IP summary at `internetdb.shodan.io`.

use shodan_tools_core::{ApiHost, Auth, EndpointDescriptor, HttpMethod, ParamSpec};

/// `GET /{ip}`, no API key
pub const GET_IP_INFO: EndpointDescriptor = EndpointDescriptor {
    name: "get_ip_info",
    description: "Get information about an IP, including open ports and vulnerabilities.",
    action: "retrieving IP information",
    host: ApiHost::InternetDb,
    method: HttpMethod::Get,
    path: "/{ip}",
    auth: Auth::None,
    params: &[ParamSpec::path("ip", "The IP address to lookup.")],
};
