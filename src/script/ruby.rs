use super::{Fragments, RenderPlan};
use crate::types::Proxy;

/// net/http-based Ruby target.
pub(crate) struct Ruby;

impl Fragments for Ruby {
    fn prelude(&self, plan: &RenderPlan) -> String {
        format!(
            "require 'net/http'\nrequire 'uri'\n\nuri = URI('{}')\nreq = Net::HTTP::{}.new(uri.request_uri)\n",
            q(plan.url),
            request_class(plan.method)
        )
    }

    fn header_line(&self, name: &str, value: &str) -> String {
        format!("req['{}'] = '{}'\n", q(name), q(value))
    }

    fn body_block(&self, body: &str) -> String {
        format!("req.body = '{}'\n", q(body))
    }

    fn connection_block(&self, _plan: &RenderPlan) -> String {
        "\nhttp = Net::HTTP.new(uri.hostname, uri.port)\n".to_string()
    }

    fn proxy_block(&self, _plan: &RenderPlan, proxy: &Proxy) -> String {
        format!(
            "\nproxy_host, proxy_port = '{}', {}\nhttp = Net::HTTP.new(uri.hostname, uri.port, proxy_host, proxy_port)\n",
            q(proxy.host()),
            proxy.port().unwrap_or("8080")
        )
    }

    fn tls_block(&self, _plan: &RenderPlan) -> String {
        "http.use_ssl = true\nhttp.verify_mode = OpenSSL::SSL::VERIFY_NONE\n".to_string()
    }

    fn response_block(&self, _plan: &RenderPlan) -> String {
        "\nresponse = http.request(req)\nputs \"Response #{response.code} #{response.message}:\n          #{response.body}\"\n"
            .to_string()
    }

    fn search_block(&self, _plan: &RenderPlan, pattern: &str) -> String {
        format!(
            r##"
response = http.request(req)
puts "Response #{{response.code}} #{{response.message}}:"

begin
  require 'colorize'
rescue LoadError
  puts 'search output needs colorize; install it with: gem install colorize'
end

matched = response.body.match /{pattern}/
highlighted = response.body
if matched then
  for i in 0..matched.length
    highlighted.gsub! /#{{matched[i]}}/, "#{{matched[i]}}".green
  end
end
puts highlighted
"##
        )
    }
}

/// Map a method token onto its Net::HTTP request class.
fn request_class(method: &str) -> String {
    let mut chars = method.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase(),
        None => "Get".to_string(),
    }
}

/// Escape for a single-quoted Ruby string.
fn q(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}
