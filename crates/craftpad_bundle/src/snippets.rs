//! Embedded runtime snippets injected into synthesized documents.

/// Installs global error/unhandledrejection listeners that surface a styled
/// overlay instead of a silently broken page. Always injected as a plain
/// script so listener registration happens before any user code runs; a
/// transpiled block cannot guarantee synchronous registration order.
pub const ERROR_TRAP_JS: &str = r##"(function () {
  function overlay(message) {
    var box = document.createElement("div");
    box.setAttribute("style", "position:fixed;left:12px;right:12px;bottom:12px;z-index:99999;background:#2d1215;color:#ffb4b4;border:1px solid #a33;border-radius:8px;padding:12px 16px;font:13px/1.5 monospace;white-space:pre-wrap;");
    box.textContent = message;
    (document.body || document.documentElement).appendChild(box);
  }
  window.addEventListener("error", function (event) {
    overlay("Error: " + (event.message || String(event.error)));
  });
  window.addEventListener("unhandledrejection", function (event) {
    overlay("Unhandled rejection: " + String(event.reason));
  });
})();"##;

/// Baseline reset applied before any user CSS in synthesized documents.
pub const BASE_STYLESHEET: &str = r##"*, *::before, *::after { box-sizing: border-box; }
html, body { margin: 0; padding: 0; min-height: 100%; }
body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif; }
::-webkit-scrollbar { width: 8px; height: 8px; }
::-webkit-scrollbar-thumb { background: #c1c1c1; border-radius: 4px; }
:focus-visible { outline: 2px solid #4c9ffe; outline-offset: 1px; }"##;

/// Auto-mount tail appended after the user source and the candidate
/// registry inside the transpiled script. Three tiers: conventional names,
/// heuristic scan of registered candidates, styled placeholder. Exceptions
/// from the first two tiers render as a styled error card, so the document
/// is never blank.
pub const AUTO_MOUNT_TAIL_JS: &str = r##"(function () {
  var container = document.getElementById("root");
  function card(title, body) {
    container.innerHTML =
      '<div style="margin:48px auto;max-width:480px;padding:24px;border:1px solid #ddd;border-radius:12px;font-family:sans-serif;text-align:center;color:#444;">' +
      "<h2 style=\"margin:0 0 8px;\">" + title + "</h2><p style=\"margin:0;\">" + body + "</p></div>";
  }
  function mount(component) {
    var element = React.createElement(component);
    if (ReactDOM.createRoot) {
      ReactDOM.createRoot(container).render(element);
    } else {
      ReactDOM.render(element, container);
    }
  }
  function textOf(value) {
    try { return String(value); } catch (e) { return ""; }
  }
  try {
    for (var i = 0; i < __craftpadMountOrder.length; i++) {
      var preferred = __craftpadCandidates[__craftpadMountOrder[i]];
      if (typeof preferred === "function") { mount(preferred); return; }
    }
    var names = Object.keys(__craftpadCandidates);
    for (var j = 0; j < names.length; j++) {
      var candidate = __craftpadCandidates[names[j]];
      if (typeof candidate !== "function") { continue; }
      var source = textOf(candidate);
      if (source.indexOf("createElement") !== -1 || source.indexOf("jsx(") !== -1 || source.indexOf("return React") !== -1) {
        mount(candidate);
        return;
      }
    }
    card("Component not found", "The generated code does not define a mountable component.");
  } catch (err) {
    card("Render error", textOf(err && err.message ? err.message : err));
  }
})();"##;
