use anyhow::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct KittyLaunchResponse {
    pub window_id: Option<u32>,
}

impl KittyLaunchResponse {
    /// `kitten @ launch` prints the id of the new window on stdout.
    pub fn parse(stdout: &str) -> Self {
        Self {
            window_id: stdout.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KittyCommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error_message: Option<String>,
}

impl<T> KittyCommandResult<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error_message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error_message: Some(message.into()),
        }
    }

    /// The payload of a successful command, or its error message as an error
    pub fn into_result(self) -> Result<T> {
        if self.success {
            match self.data {
                Some(data) => Ok(data),
                None => Err(anyhow::anyhow!("Command succeeded but no data returned")),
            }
        } else {
            let error_msg = self
                .error_message
                .unwrap_or_else(|| "Command failed".to_string());
            Err(anyhow::anyhow!(error_msg))
        }
    }
}
