use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::future::try_join_all;
use gloo::events::EventListener;
use serde::Deserialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlHeadElement, HtmlLinkElement, HtmlScriptElement};

/// Which build variant of the framework runtime group is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeMode {
    #[serde(alias = "dev")]
    Development,
    #[serde(alias = "prod")]
    Production,
}

impl RuntimeMode {
    pub fn from_id(id: &str) -> Option<RuntimeMode> {
        match id {
            "dev" | "development" => Some(RuntimeMode::Development),
            "prod" | "production" => Some(RuntimeMode::Production),
            _ => None,
        }
    }
}

/// Optional overrides embedded in the page as a JSON `<script>` element
/// with id `floorplan-config`.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct BootstrapOverrides {
    #[serde(default)]
    pub mode: Option<RuntimeMode>,
}

/// Ordered sequence of scripts; each must finish loading before the next
/// in the same group starts. Groups race each other.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptGroup {
    pub name: &'static str,
    pub scripts: Vec<String>,
}

/// Everything one bootstrap run loads, resolved against the asset base.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadPlan {
    pub stylesheet: String,
    pub groups: Vec<ScriptGroup>,
}

impl LoadPlan {
    pub fn resolve(mode: RuntimeMode, base: &str) -> LoadPlan {
        let framework = match mode {
            RuntimeMode::Development => "vendor/framework.development.js",
            RuntimeMode::Production => "vendor/framework.production.min.js",
        };
        LoadPlan {
            stylesheet: format!("{base}assets/fonts.css"),
            groups: vec![
                ScriptGroup {
                    name: "framework",
                    scripts: vec![
                        format!("{base}vendor/polyfill.min.js"),
                        format!("{base}{framework}"),
                        format!("{base}vendor/framework-dom.production.min.js"),
                    ],
                },
                ScriptGroup {
                    name: "renderer",
                    scripts: vec![
                        format!("{base}render2d.min.js"),
                        format!("{base}render2d-filters.min.js"),
                    ],
                },
            ],
        }
    }
}

/// Base path for sibling assets, derived from the bootstrap script URL.
/// Strips the query string and fragment, the script filename, and one
/// trailing versioned directory segment (`v1.2.3/` style).
pub fn asset_base(script_src: &str) -> String {
    let src = script_src
        .split(['?', '#'])
        .next()
        .unwrap_or(script_src);
    let dir = match src.rfind('/') {
        Some(idx) => &src[..=idx],
        None => return String::new(),
    };
    let trimmed = dir.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(idx) if is_version_segment(&trimmed[idx + 1..]) => trimmed[..=idx].to_string(),
        None if is_version_segment(trimmed) => String::new(),
        _ => dir.to_string(),
    }
}

fn is_version_segment(segment: &str) -> bool {
    match segment.strip_prefix('v') {
        Some(rest) => {
            !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit() || c == '.')
        }
        None => false,
    }
}

/// Value of a query parameter on a URL, if present.
pub fn query_param(url: &str, key: &str) -> Option<String> {
    let query = url.split_once('?')?.1;
    let query = query.split('#').next().unwrap_or(query);
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        (k == key).then(|| v.to_string())
    })
}

/// Mode resolution order: explicit page config, then a `?mode=` parameter
/// on the bootstrap script URL, then the port heuristic (a page served
/// with an explicit port is assumed to be a dev server).
pub fn resolve_mode(
    explicit: Option<RuntimeMode>,
    query: Option<&str>,
    port: &str,
) -> RuntimeMode {
    if let Some(mode) = explicit {
        return mode;
    }
    if let Some(mode) = query.and_then(RuntimeMode::from_id) {
        return mode;
    }
    if port.is_empty() {
        RuntimeMode::Production
    } else {
        RuntimeMode::Development
    }
}

/// Drives every group concurrently, each as an ordered sequence, and
/// resolves only once all of them have finished. Generic over the
/// per-script loader so ordering is testable without a DOM.
pub async fn join_groups<F, Fut, E>(groups: &[ScriptGroup], load: F) -> Result<(), E>
where
    F: Fn(&str) -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    let load = &load;
    try_join_all(groups.iter().map(|group| async move {
        for src in &group.scripts {
            load(src).await?;
        }
        Ok::<(), E>(())
    }))
    .await?;
    Ok(())
}

/// Full bootstrap sequence: resolve config, inject the fonts stylesheet,
/// load both dependency groups, join. The caller owns the single error
/// boundary; nothing in here logs on its own besides debug traces.
pub async fn run() -> Result<(), JsValue> {
    let document = gloo::utils::document();

    let script_src = loader_script_src(&document)?;
    let base = asset_base(&script_src);
    let overrides = embedded_overrides(&document).unwrap_or_default();
    let query_mode = query_param(&script_src, "mode");
    let port = gloo::utils::window()
        .location()
        .port()
        .unwrap_or_default();
    let mode = resolve_mode(overrides.mode, query_mode.as_deref(), &port);

    let plan = LoadPlan::resolve(mode, &base);
    log::debug!("bootstrap: mode={mode:?} base={base:?}");

    inject_stylesheet(&document, &plan.stylesheet)?;

    let loader = |src: &str| {
        let document = document.clone();
        let src = src.to_owned();
        async move { load_script(&document, &src).await }
    };
    join_groups(&plan.groups, loader).await
}

/// URL of the bootstrap `<script>` tag. `currentScript` is null by the
/// time the module body runs, so the tag is matched by its filename.
fn loader_script_src(document: &Document) -> Result<String, JsValue> {
    let tag = document
        .query_selector(r#"script[src$="loader.js"]"#)?
        .ok_or_else(|| JsValue::from_str("bootstrap script tag not found"))?;
    let script: HtmlScriptElement = tag.dyn_into()?;
    Ok(script.src())
}

fn embedded_overrides(document: &Document) -> Option<BootstrapOverrides> {
    let node = document.get_element_by_id("floorplan-config")?;
    let text = node.text_content()?;
    match serde_json::from_str(&text) {
        Ok(overrides) => Some(overrides),
        Err(err) => {
            log::warn!("bootstrap: ignoring malformed config element: {err}");
            None
        }
    }
}

fn head(document: &Document) -> Result<HtmlHeadElement, JsValue> {
    document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no <head>"))
}

fn inject_stylesheet(document: &Document, href: &str) -> Result<(), JsValue> {
    let link: HtmlLinkElement = document.create_element("link")?.dyn_into()?;
    link.set_rel("stylesheet");
    link.set_href(href);
    head(document)?.append_child(&link)?;
    Ok(())
}

/// Inserts one script tag and resolves on its load event; an error event
/// rejects, which fails the whole group.
async fn load_script(document: &Document, src: &str) -> Result<(), JsValue> {
    let script: HtmlScriptElement = document.create_element("script")?.dyn_into()?;
    script.set_src(src);

    let (tx, rx) = oneshot::channel::<Result<(), String>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let _on_load = {
        let tx = Rc::clone(&tx);
        EventListener::once(&script, "load", move |_| {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(Ok(()));
            }
        })
    };
    let _on_error = {
        let tx = Rc::clone(&tx);
        let src = src.to_owned();
        EventListener::once(&script, "error", move |_| {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(Err(format!("script failed to load: {src}")));
            }
        })
    };

    head(document)?.append_child(&script)?;

    let outcome = rx
        .await
        .map_err(|_| JsValue::from_str("script load signal dropped"))?;
    outcome.map_err(|message| JsValue::from_str(&message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::task::noop_waker_ref;
    use std::collections::HashMap;
    use std::task::{Context, Poll};

    #[test]
    fn asset_base_strips_query_and_filename() {
        assert_eq!(
            asset_base("https://plans.example.com/static/loader.js?cb=12345"),
            "https://plans.example.com/static/"
        );
        assert_eq!(asset_base("/js/loader.js#main"), "/js/");
        assert_eq!(asset_base("loader.js"), "");
    }

    #[test]
    fn asset_base_strips_versioned_directory() {
        assert_eq!(
            asset_base("https://plans.example.com/static/v2.11.0/loader.js"),
            "https://plans.example.com/static/"
        );
        assert_eq!(asset_base("v1.2.3/loader.js"), "");
        // A leading `v` alone does not make a version segment.
        assert_eq!(
            asset_base("https://plans.example.com/vendor/loader.js"),
            "https://plans.example.com/vendor/"
        );
    }

    #[test]
    fn asset_base_keeps_origin_root() {
        assert_eq!(
            asset_base("https://plans.example.com/loader.js"),
            "https://plans.example.com/"
        );
    }

    #[test]
    fn query_param_extraction() {
        assert_eq!(
            query_param("https://x/loader.js?mode=dev&cb=1", "mode").as_deref(),
            Some("dev")
        );
        assert_eq!(query_param("https://x/loader.js?cb=1", "mode"), None);
        assert_eq!(query_param("https://x/loader.js", "mode"), None);
        assert_eq!(
            query_param("https://x/loader.js?mode=prod#frag", "mode").as_deref(),
            Some("prod")
        );
    }

    #[test]
    fn port_heuristic_picks_the_variant() {
        assert_eq!(resolve_mode(None, None, "8080"), RuntimeMode::Development);
        assert_eq!(resolve_mode(None, None, ""), RuntimeMode::Production);
    }

    #[test]
    fn explicit_mode_beats_the_heuristic() {
        assert_eq!(
            resolve_mode(Some(RuntimeMode::Production), Some("dev"), "8080"),
            RuntimeMode::Production
        );
        assert_eq!(
            resolve_mode(None, Some("prod"), "8080"),
            RuntimeMode::Production
        );
        // Unrecognized query values fall through to the heuristic.
        assert_eq!(resolve_mode(None, Some("banana"), ""), RuntimeMode::Production);
    }

    #[test]
    fn overrides_parse_from_json() {
        let overrides: BootstrapOverrides = serde_json::from_str(r#"{"mode": "dev"}"#).unwrap();
        assert_eq!(overrides.mode, Some(RuntimeMode::Development));
        let empty: BootstrapOverrides = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.mode, None);
    }

    #[test]
    fn plan_picks_framework_variant_by_mode() {
        let dev = LoadPlan::resolve(RuntimeMode::Development, "/static/");
        assert!(dev.groups[0]
            .scripts
            .iter()
            .any(|s| s.ends_with("framework.development.js")));

        let prod = LoadPlan::resolve(RuntimeMode::Production, "/static/");
        assert!(prod.groups[0]
            .scripts
            .iter()
            .any(|s| s.ends_with("framework.production.min.js")));
        assert_eq!(prod.stylesheet, "/static/assets/fonts.css");
        assert_eq!(prod.groups.len(), 2);
    }

    #[test]
    fn groups_load_in_internal_order() {
        let plan = LoadPlan::resolve(RuntimeMode::Production, "");
        let started = RefCell::new(Vec::<String>::new());

        let result = block_on(join_groups(&plan.groups, |src: &str| {
            started.borrow_mut().push(src.to_owned());
            async { Ok::<(), String>(()) }
        }));
        assert_eq!(result, Ok(()));

        let started = started.borrow();
        let expected: Vec<String> = plan
            .groups
            .iter()
            .flat_map(|g| g.scripts.iter().cloned())
            .collect();
        // With instantly-ready loads each group drains in declaration order.
        assert_eq!(*started, expected);
    }

    #[test]
    fn final_stage_waits_for_both_groups() {
        let plan = LoadPlan::resolve(RuntimeMode::Production, "");
        let mut signals: HashMap<String, oneshot::Sender<()>> = HashMap::new();
        let receivers: RefCell<HashMap<String, oneshot::Receiver<()>>> =
            RefCell::new(HashMap::new());
        for group in &plan.groups {
            for src in &group.scripts {
                let (tx, rx) = oneshot::channel();
                signals.insert(src.clone(), tx);
                receivers.borrow_mut().insert(src.clone(), rx);
            }
        }

        let started = RefCell::new(Vec::<String>::new());
        let loader = |src: &str| {
            started.borrow_mut().push(src.to_owned());
            let rx = receivers.borrow_mut().remove(src).expect("unknown script");
            async move { rx.await.map_err(|_| "dropped".to_string()) }
        };

        let app_mounted = RefCell::new(false);
        let mut sequence = Box::pin(async {
            join_groups(&plan.groups, loader).await.unwrap();
            *app_mounted.borrow_mut() = true;
        });
        let mut cx = Context::from_waker(noop_waker_ref());

        // First poll starts the head script of each group, nothing more.
        assert!(sequence.as_mut().poll(&mut cx).is_pending());
        assert_eq!(started.borrow().len(), 2);

        // Drain all of group A; the final stage must still wait on group B.
        for src in plan.groups[0].scripts.clone() {
            signals.remove(&src).unwrap().send(()).unwrap();
            assert!(sequence.as_mut().poll(&mut cx).is_pending());
        }
        assert!(!*app_mounted.borrow());

        // Completing group B in order releases the join.
        let group_b = plan.groups[1].scripts.clone();
        for (i, src) in group_b.iter().enumerate() {
            signals.remove(src).unwrap().send(()).unwrap();
            let poll = sequence.as_mut().poll(&mut cx);
            if i + 1 == group_b.len() {
                assert!(matches!(poll, Poll::Ready(())));
            } else {
                assert!(poll.is_pending());
            }
        }
        assert!(*app_mounted.borrow());
    }

    #[test]
    fn failed_script_aborts_the_join() {
        let groups = vec![ScriptGroup {
            name: "framework",
            scripts: vec!["one.js".to_string()],
        }];
        let result = block_on(join_groups(&groups, |_src: &str| async {
            Err::<(), String>("load error".to_string())
        }));
        assert_eq!(result, Err("load error".to_string()));
    }
}
