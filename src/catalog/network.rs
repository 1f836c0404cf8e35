use crate::enums::severity::Severity;
use crate::structs::pattern_def::PatternDef;

const CATEGORY: &str = "Network";

pub const PATTERNS: &[PatternDef] = &[
    PatternDef {
        pattern: r"ECONNREFUSED",
        title: "Connection Refused",
        category: CATEGORY,
        explanation: "The target host answered, but nothing is listening on that port.",
        fix: "Make sure the service is running and the host and port in your config are right.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"getaddrinfo (?:ENOTFOUND|EAI_AGAIN) (\S+)",
        title: "DNS Lookup Failed",
        category: CATEGORY,
        explanation: "The hostname could not be resolved.",
        fix: "Check the spelling of '$1', your network connection and any VPN or proxy settings.",
        auto_fix_cmd: Some("nslookup $1"),
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"ETIMEDOUT",
        title: "Connection Timed Out",
        category: CATEGORY,
        explanation: "The remote host did not respond in time.",
        fix: "Check firewalls and security groups, that the host is up, and raise the client timeout if the service is slow.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"ECONNRESET|socket hang up",
        title: "Connection Reset",
        category: CATEGORY,
        explanation: "The remote side closed the connection mid-request.",
        fix: "Retry with backoff, and check server logs, proxies and keep-alive timeouts.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"blocked by CORS policy",
        title: "CORS Blocked",
        category: CATEGORY,
        explanation: "The browser blocked a cross-origin response because the server did not allow your origin.",
        fix: "Send Access-Control-Allow-Origin (and the allowed methods/headers) from the server, or proxy the request in development.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"unable to verify the first certificate|self[- ]signed certificate|CERT_HAS_EXPIRED|certificate has expired",
        title: "TLS Certificate Error",
        category: CATEGORY,
        explanation: "The server's certificate chain could not be verified.",
        fix: "Fix the server's certificate chain, or trust the internal CA via NODE_EXTRA_CA_CERTS. Do not disable verification.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"Request failed with status code (\d{3})",
        title: "HTTP Request Failed",
        category: CATEGORY,
        explanation: "The server responded with an error status.",
        fix: "Status $1: check the URL, auth headers and request body, and look at the response body for details.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"429 Too Many Requests|rate limit exceeded",
        title: "Rate Limited",
        category: CATEGORY,
        explanation: "The API is throttling your requests.",
        fix: "Back off and retry after the Retry-After interval, and batch or cache requests.",
        auto_fix_cmd: None,
        severity: Severity::Warning,
    },
];
