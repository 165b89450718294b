//! Modal State
//!
//! Detail dialogs hold the selected record; a dialog is open exactly when
//! something is selected. `DetailModal` also owns the nested image zoom so
//! the zoom can never outlive its parent.

/// Single dialog layer
#[derive(Debug, Clone, PartialEq)]
pub struct Modal<T> {
    selected: Option<T>,
}

impl<T> Default for Modal<T> {
    fn default() -> Self {
        Self { selected: None }
    }
}

impl<T> Modal<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `item`, replacing whatever was shown before
    pub fn open(&mut self, item: T) {
        self.selected = Some(item);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }
}

/// Enlarged gallery image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoomedImage {
    pub src: String,
    pub alt: String,
}

/// Detail dialog with a child image-zoom overlay
#[derive(Debug, Clone, PartialEq)]
pub struct DetailModal<T> {
    detail: Modal<T>,
    zoom: Option<ZoomedImage>,
}

impl<T> Default for DetailModal<T> {
    fn default() -> Self {
        Self { detail: Modal::default(), zoom: None }
    }
}

impl<T> DetailModal<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `item`; any zoom belonging to the previous item is dropped
    pub fn open(&mut self, item: T) {
        self.zoom = None;
        self.detail.open(item);
    }

    /// Close the detail and, with it, the zoom overlay
    pub fn close(&mut self) {
        self.zoom = None;
        self.detail.close();
    }

    pub fn is_open(&self) -> bool {
        self.detail.is_open()
    }

    pub fn selected(&self) -> Option<&T> {
        self.detail.selected()
    }

    /// Enlarge an image. Ignored while the detail is closed.
    pub fn zoom(&mut self, src: impl Into<String>, alt: impl Into<String>) {
        if self.is_open() {
            self.zoom = Some(ZoomedImage { src: src.into(), alt: alt.into() });
        }
    }

    pub fn close_zoom(&mut self) {
        self.zoom = None;
    }

    pub fn zoomed(&self) -> Option<&ZoomedImage> {
        self.zoom.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_hides_any_item() {
        let mut modal = Modal::new();
        modal.open("x");
        assert!(modal.is_open());
        modal.close();
        assert!(!modal.is_open());
        assert_eq!(modal.selected(), None);
    }

    #[test]
    fn test_reopen_shows_new_item_not_stale() {
        let mut modal = Modal::new();
        modal.open("x");
        modal.close();
        modal.open("y");
        assert_eq!(modal.selected(), Some(&"y"));
    }

    #[test]
    fn test_open_while_open_replaces() {
        let mut modal = Modal::new();
        modal.open(1);
        modal.open(2);
        assert_eq!(modal.selected(), Some(&2));
        modal.close();
        // No queue: a single close empties the dialog
        assert!(!modal.is_open());
    }

    #[test]
    fn test_closing_detail_closes_zoom() {
        let mut modal = DetailModal::new();
        modal.open("project");
        modal.zoom("/images/a.png", "screenshot 1");
        assert!(modal.zoomed().is_some());

        modal.close();
        assert!(!modal.is_open());
        assert!(modal.zoomed().is_none());
    }

    #[test]
    fn test_zoom_requires_open_detail() {
        let mut modal: DetailModal<&str> = DetailModal::new();
        modal.zoom("/images/a.png", "orphan");
        assert!(modal.zoomed().is_none());
    }

    #[test]
    fn test_close_zoom_keeps_detail() {
        let mut modal = DetailModal::new();
        modal.open("project");
        modal.zoom("/images/a.png", "screenshot 1");
        modal.close_zoom();
        assert!(modal.zoomed().is_none());
        assert_eq!(modal.selected(), Some(&"project"));
    }

    #[test]
    fn test_switching_item_drops_zoom() {
        let mut modal = DetailModal::new();
        modal.open("a");
        modal.zoom("/images/a.png", "a");
        modal.open("b");
        assert!(modal.zoomed().is_none());
        assert_eq!(modal.selected(), Some(&"b"));
    }
}
