use url::Url;

/// Query parameter the payment provider sends back on return navigation.
pub const PAYMENT_PARAM: &str = "payment";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnMarker {
    Success,
    Cancel,
}

impl ReturnMarker {
    pub fn as_str(self) -> &'static str {
        match self {
            ReturnMarker::Success => "success",
            ReturnMarker::Cancel => "cancel",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "success" => Some(ReturnMarker::Success),
            "cancel" => Some(ReturnMarker::Cancel),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    url: Url,
}

impl PageLocation {
    pub fn parse(href: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            url: Url::parse(href)?,
        })
    }

    pub fn path(&self) -> &str {
        self.url.path()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.url.fragment().filter(|f| !f.is_empty())
    }

    /// The payment outcome carried by the query, if any. Like
    /// `URLSearchParams.get`, only the first `payment` entry counts.
    pub fn return_marker(&self) -> Option<ReturnMarker> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == PAYMENT_PARAM)
            .and_then(|(_, value)| ReturnMarker::parse(&value))
    }

    /// Where the provider should send the visitor back: this page, without
    /// its query or fragment, plus the outcome marker.
    pub fn return_url(&self, marker: ReturnMarker) -> String {
        let mut url = self.url.clone();
        url.set_fragment(None);
        url.set_query(None);
        url.query_pairs_mut()
            .append_pair(PAYMENT_PARAM, marker.as_str());
        url.to_string()
    }
}

/// The browser's address bar: read the current location and rewrite it in
/// place without a reload.
pub trait AddressBar {
    fn location(&self) -> Option<PageLocation>;
    fn replace_path(&self, path: &str);
}

pub struct BrowserAddressBar;

impl AddressBar for BrowserAddressBar {
    fn location(&self) -> Option<PageLocation> {
        let href = gloo_utils::window().location().href().ok()?;
        match PageLocation::parse(&href) {
            Ok(location) => Some(location),
            Err(err) => {
                log::warn!("Unable to parse page location {:?}: {}", href, err);
                None
            }
        }
    }

    fn replace_path(&self, path: &str) {
        let history = match gloo_utils::window().history() {
            Ok(history) => history,
            Err(err) => {
                log::warn!("History API unavailable: {:?}", err);
                return;
            }
        };
        if let Err(err) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path)) {
            log::warn!("Unable to rewrite the address bar: {:?}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_success_and_cancel_markers() {
        let success = PageLocation::parse("https://guia.example/curso/?payment=success").unwrap();
        assert_eq!(success.return_marker(), Some(ReturnMarker::Success));

        let cancel = PageLocation::parse("https://guia.example/?x=1&payment=cancel").unwrap();
        assert_eq!(cancel.return_marker(), Some(ReturnMarker::Cancel));
    }

    #[test]
    fn unknown_or_missing_marker_is_ignored() {
        let other = PageLocation::parse("https://guia.example/?payment=maybe").unwrap();
        assert_eq!(other.return_marker(), None);

        let plain = PageLocation::parse("https://guia.example/#module1").unwrap();
        assert_eq!(plain.return_marker(), None);
        assert_eq!(plain.fragment(), Some("module1"));
    }

    #[test]
    fn first_marker_wins() {
        let location =
            PageLocation::parse("https://guia.example/?payment=cancel&payment=success").unwrap();
        assert_eq!(location.return_marker(), Some(ReturnMarker::Cancel));
    }

    #[test]
    fn return_urls_point_back_at_the_current_page() {
        let location =
            PageLocation::parse("https://guia.example/pcb/index.html?ref=ad#module2").unwrap();
        assert_eq!(
            location.return_url(ReturnMarker::Success),
            "https://guia.example/pcb/index.html?payment=success"
        );
        assert_eq!(
            location.return_url(ReturnMarker::Cancel),
            "https://guia.example/pcb/index.html?payment=cancel"
        );
        assert_eq!(location.path(), "/pcb/index.html");
    }
}
