/// Options for the development server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Whether to open the browser once the server is listening
    pub open_url: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 4000,
            open_url: false,
        }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        ServerConfig {
            host: host.to_string(),
            port,
            ..Default::default()
        }
    }

    pub fn with_open_url(mut self, open_url: bool) -> Self {
        self.open_url = open_url;
        self
    }

    /// `host:port`, as handed to the listener
    pub fn address_string(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Browser URL; wildcard binds are shown as localhost
    pub fn url(&self) -> String {
        let host = match self.host.as_str() {
            "0.0.0.0" | "::" | "" => "localhost",
            host => host,
        };
        format!("http://{}:{}", host, self.port)
    }
}
