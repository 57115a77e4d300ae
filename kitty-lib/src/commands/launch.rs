/// Script used to print an opening message before handing over to the real program.
/// `$1` is the message, the remaining arguments are the program and its arguments.
const MESSAGE_WRAPPER: &str = r#"printf '%s\n\n' "$1"; shift; exec "$@""#;

#[derive(Debug, Clone)]
pub struct KittenLaunchCommand {
    pub launch_type: String,
    pub keep_focus: bool,
    pub cwd: Option<String>,
    pub env: Vec<(String, String)>,
    pub tab_title: Option<String>,
    pub window_title: Option<String>,
    pub color: Option<String>,
    pub message: Option<String>,
    pub program: Vec<String>,
}

impl Default for KittenLaunchCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl KittenLaunchCommand {
    pub fn new() -> Self {
        Self {
            launch_type: "tab".to_string(),
            keep_focus: false,
            cwd: None,
            env: Vec::new(),
            tab_title: None,
            window_title: None,
            color: None,
            message: None,
            program: Vec::new(),
        }
    }

    pub fn launch_type(mut self, launch_type: &str) -> Self {
        self.launch_type = launch_type.to_string();
        self
    }

    pub fn keep_focus(mut self, keep_focus: bool) -> Self {
        self.keep_focus = keep_focus;
        self
    }

    pub fn cwd(mut self, cwd: &str) -> Self {
        self.cwd = Some(cwd.to_string());
        self
    }

    /// Add one environment variable. Repeated calls accumulate in order.
    pub fn env(mut self, env_var: &str, value: &str) -> Self {
        self.env.push((env_var.to_string(), value.to_string()));
        self
    }

    pub fn tab_title(mut self, title: &str) -> Self {
        self.tab_title = Some(title.to_string());
        self
    }

    pub fn window_title(mut self, title: &str) -> Self {
        self.window_title = Some(title.to_string());
        self
    }

    pub fn color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    pub fn message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn program<I, S>(mut self, program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.program = std::iter::once(program.to_string())
            .chain(args.into_iter().map(Into::into))
            .collect();
        self
    }

    /// Arguments following `kitten @ launch`.
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![format!("--type={}", self.launch_type)];

        if self.keep_focus {
            args.push("--keep-focus".to_string());
        }
        if let Some(cwd) = &self.cwd {
            args.push(format!("--cwd={}", cwd));
        }
        for (key, value) in &self.env {
            args.push(format!("--env={}={}", key, value));
        }
        if let Some(tab_title) = &self.tab_title {
            args.push(format!("--tab-title={}", tab_title));
        }
        if let Some(window_title) = &self.window_title {
            args.push(format!("--title={}", window_title));
        }
        if let Some(color) = &self.color {
            args.push(format!("--color=background={}", color));
        }

        if self.program.is_empty() {
            return args;
        }

        match &self.message {
            Some(message) => {
                args.extend([
                    "sh".to_string(),
                    "-c".to_string(),
                    MESSAGE_WRAPPER.to_string(),
                    "terminator".to_string(),
                    message.clone(),
                ]);
                args.extend(self.program.iter().cloned());
            }
            None => args.extend(self.program.iter().cloned()),
        }

        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_launch_has_only_type() {
        assert_eq!(KittenLaunchCommand::new().args(), vec!["--type=tab"]);
    }

    #[test]
    fn test_args_order_and_env_repetition() {
        let command = KittenLaunchCommand::new()
            .launch_type("window")
            .keep_focus(true)
            .cwd("/tmp/work")
            .env("A", "1")
            .env("B", "two words")
            .tab_title("dev")
            .program("/bin/sh", ["-c", "echo hi"]);

        assert_eq!(
            command.args(),
            vec![
                "--type=window",
                "--keep-focus",
                "--cwd=/tmp/work",
                "--env=A=1",
                "--env=B=two words",
                "--tab-title=dev",
                "/bin/sh",
                "-c",
                "echo hi",
            ]
        );
    }

    #[test]
    fn test_message_wraps_program() {
        let command = KittenLaunchCommand::new()
            .message("welcome")
            .program("/usr/bin/fish", Vec::<String>::new());

        let args = command.args();
        assert_eq!(args[1..4], ["sh", "-c", MESSAGE_WRAPPER]);
        assert_eq!(args[4..], ["terminator", "welcome", "/usr/bin/fish"]);
    }

    #[test]
    fn test_message_without_program_is_ignored() {
        let command = KittenLaunchCommand::new().message("welcome");
        assert_eq!(command.args(), vec!["--type=tab"]);
    }

    #[test]
    fn test_color_and_window_title() {
        let command = KittenLaunchCommand::new()
            .window_title("logs")
            .color("#102030");
        assert_eq!(
            command.args(),
            vec!["--type=tab", "--title=logs", "--color=background=#102030"]
        );
    }
}
