//! HTTP 请求封装模块
//!
//! 基于 `gloo-net` 的 fetch 实现核心库的 [`HttpClient`]。
//! 只有网络层失败返回错误，非 2xx 状态码原样交给上层解码。

use async_trait::async_trait;
use gloo_net::http::{Method, RequestBuilder};
use sweetshop::request::HttpMethod;
use sweetshop::{HttpClient, HttpRequest, HttpResponse, ShopError, ShopResult};

/// 浏览器 fetch 客户端
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchClient;

fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

#[async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> ShopResult<HttpResponse> {
        let mut builder = RequestBuilder::new(&req.url).method(to_method(req.method));
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ShopError::network(e.to_string()))?;

        let resp = request
            .send()
            .await
            .map_err(|e| ShopError::network(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ShopError::network(e.to_string()))?;

        Ok(HttpResponse::new(status, body))
    }
}
