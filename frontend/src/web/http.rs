//! HTTP 请求封装模块
//!
//! 基于 `gloo-net` 的 fetch 实现，满足核心 crate 的 `HttpClient` 抽象。

use gloo_net::http::{Method, RequestBuilder};
use medicitas::error::{ClientError, ClientResult};
use medicitas::request::{HttpClient, HttpMethod, HttpRequest, HttpResponse};

fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// 浏览器 fetch 客户端
#[derive(Clone, Copy, Default)]
pub struct FetchHttpClient;

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> ClientResult<HttpResponse> {
        let mut builder = RequestBuilder::new(&req.url).method(to_method(req.method));
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ClientError::network(format!("请求构建失败: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::network(format!("网络错误: {}", e)).with_source(e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::network(format!("响应读取失败: {}", e)).with_source(e))?;

        Ok(HttpResponse { status, body })
    }
}
