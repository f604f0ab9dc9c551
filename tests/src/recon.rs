mod integration;
mod live_http;
