#[derive(Debug, Clone)]
pub struct KittenFocusWindowCommand {
    pub window_id: u32,
}

impl KittenFocusWindowCommand {
    pub fn new(window_id: u32) -> Self {
        Self { window_id }
    }

    pub fn match_arg(&self) -> String {
        format!("--match=id:{}", self.window_id)
    }
}
