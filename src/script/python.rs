use super::{Fragments, RenderPlan};
use crate::types::Proxy;

/// requests-based Python target.
pub(crate) struct Python;

impl Fragments for Python {
    fn prelude(&self, plan: &RenderPlan) -> String {
        format!(
            "#!/usr/bin/env python\nimport requests\n\nurl = '{}'\nheaders = {{}}\ndata = None\nproxies = None\nverify = True\n",
            q(plan.url)
        )
    }

    fn header_line(&self, name: &str, value: &str) -> String {
        format!("headers['{}'] = '{}'\n", q(name), q(value))
    }

    fn body_block(&self, body: &str) -> String {
        format!("data = '{}'\n", q(body))
    }

    fn connection_block(&self, _plan: &RenderPlan) -> String {
        String::new()
    }

    fn proxy_block(&self, _plan: &RenderPlan, proxy: &Proxy) -> String {
        let address = q(&proxy.address());
        format!("proxies = {{'http': 'http://{address}', 'https': 'http://{address}'}}\n")
    }

    fn tls_block(&self, _plan: &RenderPlan) -> String {
        "verify = False\n".to_string()
    }

    fn response_block(&self, plan: &RenderPlan) -> String {
        format!(
            "\n{}\nprint('Response {{}} {{}}:'.format(response.status_code, response.reason))\nprint(response.text)\n",
            request_call(plan.method)
        )
    }

    fn search_block(&self, plan: &RenderPlan, pattern: &str) -> String {
        format!(
            r#"
{}
print('Response {{}} {{}}:'.format(response.status_code, response.reason))

import re
highlighted = response.text
for match in set(re.findall(r'{}', response.text)):
    highlighted = highlighted.replace(match, '\033[92m' + match + '\033[0m')
print(highlighted)
"#,
            request_call(plan.method),
            q(pattern)
        )
    }
}

fn request_call(method: &str) -> String {
    format!(
        "response = requests.request('{}', url, headers=headers, data=data, proxies=proxies, verify=verify)",
        q(method)
    )
}

/// Escape for a single-quoted Python string.
fn q(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}
