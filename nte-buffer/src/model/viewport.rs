#[derive(Clone, Debug, Default)]
pub struct ViewPort {
    pub height: u16,
    pub vertical_index: usize,
    pub width: u16,
}

impl ViewPort {
    pub fn new(height: u16, width: u16) -> Self {
        Self {
            height,
            vertical_index: 0,
            width,
        }
    }

    /// Rows available for content. A zero height still shows the cursor line.
    pub fn get_visible_height(&self) -> usize {
        usize::from(self.height.max(1))
    }

    pub fn get_max_vertical_index(&self, line_count: usize) -> usize {
        line_count.saturating_sub(self.get_visible_height())
    }

    pub fn is_visible(&self, index: usize) -> bool {
        index >= self.vertical_index && index < self.vertical_index + self.get_visible_height()
    }
}
