use url::Url;

/// Image strip of an article: one main image plus thumbnails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    urls: Vec<String>,
    active: usize,
}

impl Gallery {
    /// Resolves server-relative image paths against the API base.
    pub fn new(api_base: &Url, images: &[String]) -> Self {
        let base = api_base.as_str().trim_end_matches('/');
        let urls = images
            .iter()
            .map(|src| format!("{}/{}", base, src.trim_start_matches('/')))
            .collect();
        Self { urls, active: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn main_image(&self) -> Option<&str> {
        self.urls.get(self.active).map(String::as_str)
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Thumbnails are only shown when there is something to switch to.
    pub fn thumbnails(&self) -> &[String] {
        if self.urls.len() > 1 { &self.urls[..] } else { &[] }
    }

    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.urls.len() {
            return false;
        }
        self.active = index;
        true
    }
}
