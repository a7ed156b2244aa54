use super::{Fragments, RenderPlan};
use crate::types::Proxy;

/// curl-based shell target.
pub(crate) struct Bash;

impl Fragments for Bash {
    fn prelude(&self, plan: &RenderPlan) -> String {
        format!(
            "#!/usr/bin/env bash\n\ncurl --include --request {} '{}'",
            plan.method,
            q(plan.url)
        )
    }

    fn header_line(&self, name: &str, value: &str) -> String {
        format!(" \\\n  --header '{}: {}'", q(name), q(value))
    }

    fn body_block(&self, body: &str) -> String {
        format!(" \\\n  --data '{}'", q(body))
    }

    fn connection_block(&self, _plan: &RenderPlan) -> String {
        // curl connects on its own.
        String::new()
    }

    fn proxy_block(&self, _plan: &RenderPlan, proxy: &Proxy) -> String {
        format!(" \\\n  --proxy '{}'", q(&proxy.address()))
    }

    fn tls_block(&self, _plan: &RenderPlan) -> String {
        " \\\n  --insecure".to_string()
    }

    fn response_block(&self, _plan: &RenderPlan) -> String {
        "\n".to_string()
    }

    fn search_block(&self, _plan: &RenderPlan, pattern: &str) -> String {
        // `|$` keeps non-matching lines in the output.
        format!(" \\\n  | grep --color=always -E '{}|$'\n", q(pattern))
    }
}

/// Escape for a single-quoted shell string.
fn q(s: &str) -> String {
    s.replace('\'', "'\\''")
}
