use quick_xml::Reader;
use quick_xml::events::Event;

#[derive(Clone, Copy)]
enum CurrentTag {
    Release,
    Latest,
    Other,
}

/// Scan a maven-metadata style document for a released version.
///
/// The first `<release>` text wins; `<latest>` is the fallback when no
/// release tag is present. No validation of the extracted string is done
/// here, and a malformed tail does not invalidate text already seen.
pub fn extract_release_version(body: &str) -> Option<String> {
    let mut reader = Reader::from_str(body);
    let mut release: Option<String> = None;
    let mut latest: Option<String> = None;
    let mut current = CurrentTag::Other;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                current = match e.local_name().as_ref() {
                    b"release" => CurrentTag::Release,
                    b"latest" => CurrentTag::Latest,
                    _ => CurrentTag::Other,
                };
            }
            Ok(Event::Text(e)) => {
                let text = String::from_utf8_lossy(&e);
                let text = text.trim();
                if text.is_empty() {
                    continue;
                }
                match current {
                    CurrentTag::Release if release.is_none() => {
                        release = Some(text.to_string());
                    }
                    CurrentTag::Latest if latest.is_none() => {
                        latest = Some(text.to_string());
                    }
                    _ => {}
                }
            }
            Ok(Event::End(_)) => current = CurrentTag::Other,
            Ok(Event::Eof) | Err(_) => break,
            Ok(_) => {}
        }
    }

    release.or(latest)
}
