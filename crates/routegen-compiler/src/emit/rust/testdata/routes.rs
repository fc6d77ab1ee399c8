// @generated by routegen. Do not edit.

/// URL for `/product/{productId:int}.{format?}`.
pub fn product(product_id: i32, format: Option<&str>, q: Option<&str>, section: Option<&str>) -> String {
    let mut url = String::from("/product/");
    url.push_str(&url_helpers::encode(&product_id.to_string()));
    if let Some(format) = format {
        url.push('.');
        url.push_str(&url_helpers::encode(format));
    }
    if let Some(q) = q {
        url_helpers::push_query(&mut url, "search", &q.to_lowercase());
    }
    if let Some(section) = section {
        url.push('#');
        url.push_str(&url_helpers::encode(section));
    }
    url
}

/// URL for `/docs/{**path}`.
pub fn docs(path: Option<&str>) -> String {
    let mut url = String::from("/docs");
    if let Some(path) = path {
        url.push_str(&url_helpers::encode_path(path, true));
    }
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

/// URL for `/raw/{*path}`.
pub fn raw(path: &str) -> String {
    let mut url = String::from("/raw");
    url.push_str(&url_helpers::encode_path(path, false));
    url
}

/// URL for `/search`.
pub fn search(tags: &[String], filter: Option<&[(String, i64)]>, sort: (&str, i32), page: u32) -> String {
    let mut url = String::from("/search");
    for item in tags {
        url_helpers::push_query(&mut url, "tags", item);
    }
    if let Some(filter) = filter {
        for (key, value) in filter {
            url_helpers::push_query(&mut url, &format!("filter[{}]", url_helpers::encode(key)), &value.to_string());
        }
    }
    let (key, value) = sort;
    url_helpers::push_query(&mut url, &format!("sort[{}]", url_helpers::encode(key)), &value.to_string());
    url_helpers::push_query(&mut url, "page", &page.to_string());
    url
}

/// URL for `/{slug?}`.
pub fn page(slug: Option<&str>) -> String {
    let mut url = String::new();
    if let Some(slug) = slug {
        url.push('/');
        url.push_str(&url_helpers::encode(slug));
    }
    if url.is_empty() {
        url.push('/');
    }
    url
}

/// URL for `/Users/{Id}`.
pub fn user(id: i64, tab: Option<&str>) -> String {
    let mut url = String::from("/users/");
    url.push_str(&url_helpers::encode(&id.to_string().to_lowercase()));
    if let Some(tab) = tab {
        url_helpers::push_query(&mut url, "Tab", tab);
    }
    url
}

mod url_helpers {
    pub(super) fn encode(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for byte in text.bytes() {
            match byte {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                    out.push(char::from(byte));
                }
                _ => out.push_str(&format!("%{byte:02X}")),
            }
        }
        out
    }

    /// `/`-prefixed catch-all value. With `keep_slashes`, every non-empty
    /// chunk is encoded separately and a trailing `/` survives.
    pub(super) fn encode_path(text: &str, keep_slashes: bool) -> String {
        let mut out = String::new();
        if !keep_slashes {
            if !text.is_empty() {
                out.push('/');
                out.push_str(&encode(text));
            }
            return out;
        }
        for chunk in text.split('/').filter(|chunk| !chunk.is_empty()) {
            out.push('/');
            out.push_str(&encode(chunk));
        }
        if !out.is_empty() && text.ends_with('/') {
            out.push('/');
        }
        out
    }

    pub(super) fn push_query(url: &mut String, key: &str, value: &str) {
        url.push(if url.contains('?') { '&' } else { '?' });
        url.push_str(key);
        url.push('=');
        url.push_str(&encode(value));
    }
}
