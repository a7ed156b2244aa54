use super::{Fragments, RenderPlan};
use crate::types::Proxy;

/// ext-curl-based PHP target.
pub(crate) struct Php;

impl Fragments for Php {
    fn prelude(&self, plan: &RenderPlan) -> String {
        format!(
            "<?php\n\n$ch = curl_init();\ncurl_setopt($ch, CURLOPT_URL, '{}');\ncurl_setopt($ch, CURLOPT_CUSTOMREQUEST, '{}');\ncurl_setopt($ch, CURLOPT_RETURNTRANSFER, true);\n$headers = array();\n",
            q(plan.url),
            q(plan.method)
        )
    }

    fn header_line(&self, name: &str, value: &str) -> String {
        format!("$headers[] = '{}: {}';\n", q(name), q(value))
    }

    fn body_block(&self, body: &str) -> String {
        format!("curl_setopt($ch, CURLOPT_POSTFIELDS, '{}');\n", q(body))
    }

    fn connection_block(&self, _plan: &RenderPlan) -> String {
        String::new()
    }

    fn proxy_block(&self, _plan: &RenderPlan, proxy: &Proxy) -> String {
        format!("curl_setopt($ch, CURLOPT_PROXY, '{}');\n", q(&proxy.address()))
    }

    fn tls_block(&self, _plan: &RenderPlan) -> String {
        "curl_setopt($ch, CURLOPT_SSL_VERIFYPEER, false);\n".to_string()
    }

    fn response_block(&self, _plan: &RenderPlan) -> String {
        "curl_setopt($ch, CURLOPT_HTTPHEADER, $headers);\n\n$response = curl_exec($ch);\ncurl_close($ch);\necho $response;\n"
            .to_string()
    }

    fn search_block(&self, _plan: &RenderPlan, pattern: &str) -> String {
        format!(
            r#"curl_setopt($ch, CURLOPT_HTTPHEADER, $headers);

$response = curl_exec($ch);
curl_close($ch);
preg_match_all('/{}/', $response, $matches);
foreach (array_unique($matches[0]) as $match) {{
    $response = str_replace($match, "\033[92m" . $match . "\033[0m", $response);
}}
echo $response;
"#,
            q(pattern)
        )
    }
}

/// Escape for a single-quoted PHP string.
fn q(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}
