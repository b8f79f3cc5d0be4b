mod http_query_sink;

pub use http_query_sink::HttpQuerySink;
