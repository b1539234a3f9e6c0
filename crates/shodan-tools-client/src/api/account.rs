//! Account endpoints.

use shodan_tools_core::{ApiHost, Auth, EndpointDescriptor, HttpMethod};

/// `GET /account/profile`
pub const GET_SHODAN_ACCOUNT_PROFILE: EndpointDescriptor = EndpointDescriptor {
    name: "get_shodan_account_profile",
    description: "Retrieve information about the Shodan account linked to the provided API key.",
    action: "retrieving the account profile",
    host: ApiHost::Api,
    method: HttpMethod::Get,
    path: "/account/profile",
    auth: Auth::ApiKey,
    params: &[],
};

/// `GET /api-info`, plan name and remaining credits
pub const GET_API_PLAN_INFO: EndpointDescriptor = EndpointDescriptor {
    name: "get_api_plan_info",
    description: "Retrieve API plan information from Shodan.",
    action: "retrieving API plan information",
    host: ApiHost::Api,
    method: HttpMethod::Get,
    path: "/api-info",
    auth: Auth::ApiKey,
    params: &[],
};
