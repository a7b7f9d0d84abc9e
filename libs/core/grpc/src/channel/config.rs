use std::time::Duration;
use tonic::transport::Endpoint;

/// Configuration for outgoing gRPC channels
///
/// HTTP/2 and TCP settings applied to every downstream channel. The request
/// timeout is an upper bound; a tighter per-call deadline set on the request
/// (`grpc-timeout`) still wins.
#[derive(Debug, Clone)]
pub struct ChannelConfig {
  // HTTP/2 Keep-Alive
  pub http2_keep_alive_interval: Option<Duration>,
  pub keep_alive_timeout: Duration,
  pub keep_alive_while_idle: bool,

  // Connection settings
  pub connect_timeout: Duration,
  pub timeout: Duration,

  // Window sizes (HTTP/2 flow control)
  pub initial_connection_window_size: Option<u32>,
  pub initial_stream_window_size: Option<u32>,
  pub http2_adaptive_window: bool,

  // TCP settings
  pub tcp_nodelay: bool,
  pub tcp_keepalive: Option<Duration>,
}

impl Default for ChannelConfig {
  fn default() -> Self {
    Self {
      http2_keep_alive_interval: Some(Duration::from_secs(30)),
      keep_alive_timeout: Duration::from_secs(10),
      keep_alive_while_idle: true,
      connect_timeout: Duration::from_secs(5),
      timeout: Duration::from_secs(10),
      initial_connection_window_size: Some(1024 * 1024), // 1MB
      initial_stream_window_size: Some(1024 * 1024),     // 1MB
      http2_adaptive_window: true,
      tcp_nodelay: true,
      tcp_keepalive: Some(Duration::from_secs(30)),
    }
  }
}

impl ChannelConfig {
  /// Create a new configuration with defaults
  pub fn new() -> Self {
    Self::default()
  }

  /// Set the connection timeout
  pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
    self.connect_timeout = timeout;
    self
  }

  /// Set the upper bound for individual RPCs
  ///
  /// # Example
  /// ```ignore
  /// let config = ChannelConfig::new()
  ///     .with_request_timeout(Duration::from_secs(3));
  /// ```
  pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = timeout;
    self
  }

  /// Disable HTTP/2 keep-alive
  pub fn without_keep_alive(mut self) -> Self {
    self.http2_keep_alive_interval = None;
    self
  }

  /// Apply this configuration to a tonic Endpoint
  pub(crate) fn apply_to_endpoint(self, mut endpoint: Endpoint) -> Endpoint {
    if let Some(interval) = self.http2_keep_alive_interval {
      endpoint = endpoint.http2_keep_alive_interval(interval);
    }
    endpoint = endpoint
      .keep_alive_timeout(self.keep_alive_timeout)
      .keep_alive_while_idle(self.keep_alive_while_idle)
      .connect_timeout(self.connect_timeout)
      .timeout(self.timeout);

    if let Some(size) = self.initial_connection_window_size {
      endpoint = endpoint.initial_connection_window_size(size);
    }
    if let Some(size) = self.initial_stream_window_size {
      endpoint = endpoint.initial_stream_window_size(size);
    }

    endpoint
      .http2_adaptive_window(self.http2_adaptive_window)
      .tcp_nodelay(self.tcp_nodelay)
      .tcp_keepalive(self.tcp_keepalive)
  }
}
