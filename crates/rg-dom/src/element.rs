use crate::layout::{ComputedLayout, Layout, Offset, Size};
use crate::primitives::Rect;

/// Identifier used to target an element with listeners
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An element of the rendered markup
#[derive(Clone, Debug)]
pub struct Element {
    /// Tag name, informational only
    pub tag: String,
    /// Width of the element
    pub width: Size,
    /// Height of the element
    pub height: Size,
    /// Offset from the default position
    pub offset: Offset,
    /// Layout direction for children
    pub layout: Layout,
    /// Inline `left` style as a percentage of the parent's width
    pub left_percent: Option<f32>,
    /// Text content
    pub text: Option<String>,
    /// Child elements
    pub children: Vec<Element>,
    id: Option<ElementId>,
    classes: Vec<String>,
    /// Computed layout (filled during layout pass)
    computed: Option<ComputedLayout>,
}

impl Element {
    /// Create a new element with the given tag
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            width: Size::default(),
            height: Size::default(),
            offset: Offset::zero(),
            layout: Layout::default(),
            left_percent: None,
            text: None,
            children: Vec::new(),
            id: None,
            classes: Vec::new(),
            computed: None,
        }
    }

    /// Set the id
    pub fn with_id(mut self, id: ElementId) -> Self {
        self.id = Some(id);
        self
    }

    /// Add a class name
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    /// Set the width
    pub fn with_width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    /// Set the height
    pub fn with_height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    /// Set both width and height to fixed pixel values
    pub fn with_size(self, width: f32, height: f32) -> Self {
        self.with_width(Size::px(width)).with_height(Size::px(height))
    }

    /// Set the offset
    pub fn with_offset(mut self, offset: Offset) -> Self {
        self.offset = offset;
        self
    }

    /// Set the layout direction
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the text content
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Add a child element
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Add multiple children
    pub fn with_children(mut self, children: Vec<Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn id(&self) -> Option<&ElementId> {
        self.id.as_ref()
    }

    /// Set an id only if the element has none yet
    pub(crate) fn set_auto_id(&mut self, id: ElementId) {
        if self.id.is_none() {
            self.id = Some(id);
        }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !class.is_empty() && !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    /// Get the computed layout (if available)
    pub fn computed_layout(&self) -> Option<&ComputedLayout> {
        self.computed.as_ref()
    }

    /// Laid out width, zero before the first layout pass
    pub fn client_width(&self) -> f32 {
        self.computed.map(|c| c.rect.width()).unwrap_or(0.0)
    }

    /// Laid out left edge in viewport coordinates, zero before the first layout pass
    pub fn viewport_left(&self) -> f32 {
        self.computed.map(|c| c.rect.left()).unwrap_or(0.0)
    }

    /// Compute layout for this element and all children
    ///
    /// `available_rect` is the space available for this element (typically the viewport)
    pub fn compute_layout(&mut self, available_rect: Rect) {
        self.compute_layout_with_parent_size(
            available_rect.min,
            available_rect.width(),
            available_rect.height(),
        );
    }

    fn compute_layout_with_parent_size(
        &mut self,
        origin: [f32; 2],
        parent_width: f32,
        parent_height: f32,
    ) {
        let width = self.width.resolve(parent_width);
        let height = self.height.resolve(parent_height);

        // Inline `left` is relative to the containing element's width
        let left = self
            .left_percent
            .map(|percent| parent_width * percent / 100.0)
            .unwrap_or(0.0);

        let x = origin[0] + self.offset.x + left;
        let y = origin[1] + self.offset.y;
        self.computed = Some(ComputedLayout::new(Rect::from_min_size(
            [x, y],
            [width, height],
        )));

        let mut cursor = [x, y];
        for child in &mut self.children {
            child.compute_layout_with_parent_size(cursor, width, height);

            let Some(child_rect) = child.computed_layout().map(|c| c.rect) else {
                continue;
            };
            match self.layout {
                Layout::Stack => {}
                Layout::Horizontal => cursor[0] += child_rect.width(),
                Layout::Vertical => cursor[1] += child_rect.height(),
            }
        }
    }
}

impl Default for Element {
    fn default() -> Self {
        Self::new("div")
    }
}
