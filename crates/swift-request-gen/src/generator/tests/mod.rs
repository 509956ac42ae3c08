mod request;
mod support;
