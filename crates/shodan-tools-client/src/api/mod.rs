//! The endpoint catalog, one descriptor per tool.

pub mod account;
pub mod dns;
pub mod internetdb;
pub mod scan;
pub mod search;
pub mod trends;

use shodan_tools_core::EndpointDescriptor;

/// Every endpoint exposed as a tool, grouped by API family
pub static ALL: [&EndpointDescriptor; 20] = [
    &search::GET_HOST_INFO,
    &search::SEARCH_SHODAN,
    &search::SEARCH_SHODAN_HOST_COUNT,
    &search::LIST_SEARCH_FACETS,
    &search::LIST_SEARCH_FILTERS,
    &search::BREAK_SEARCH_QUERY_INTO_TOKENS,
    &scan::LIST_SHODAN_PORTS,
    &scan::LIST_PROTOCOLS,
    &scan::REQUEST_SHODAN_CRAWL,
    &scan::CRAWL_INTERNET,
    &scan::GET_SCANS,
    &scan::GET_SCAN_STATUS,
    &dns::GET_DOMAIN_INFO,
    &dns::DNS_LOOKUP,
    &dns::REVERSE_DNS_LOOKUP,
    &account::GET_SHODAN_ACCOUNT_PROFILE,
    &account::GET_API_PLAN_INFO,
    &trends::LIST_TRENDS_SEARCH_FACETS,
    &trends::SEARCH_TRENDS,
    &internetdb::GET_IP_INFO,
];

/// Look up a descriptor by tool name
#[must_use]
pub fn find(name: &str) -> Option<&'static EndpointDescriptor> {
    ALL.iter().copied().find(|e| e.name == name)
}
