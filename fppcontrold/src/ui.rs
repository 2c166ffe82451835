//! Touch control page
//!
//! Renders a grid of tiles: one per configured button, followed by the
//! command preset tiles. Each tile carries the gateway endpoint it posts
//! to in `data-action`; a small script does the request and shows the
//! result in a status line.

use fppcontrol_core::command::FSEQ_EFFECT_START_COMMAND;
use fppcontrol_core::{ButtonConfig, ButtonType, PresetButton};

const PRESET_COLOR: &str = "#3a3a3a";

/// Gateway endpoint a button posts to.
pub(crate) fn button_action(button: &ButtonConfig) -> String {
    let name = urlencoding::encode(&button.name);
    match button.kind {
        ButtonType::Sequence => format!("/api/sequence/{}/start", name),
        ButtonType::SequenceEffect => format!(
            "/api/command/{}/{}",
            urlencoding::encode(FSEQ_EFFECT_START_COMMAND),
            name
        ),
        ButtonType::Effect => format!("/api/effect/{}/start", name),
        ButtonType::Playlist => format!("/api/playlist/{}/start", name),
        ButtonType::Stop => "/api/stop".to_string(),
    }
}

/// Stable hue in `0..360` for a name, so unconfigured tiles keep their color.
pub(crate) fn name_hue(name: &str) -> u32 {
    let hash = name
        .encode_utf16()
        .fold(0u32, |h, unit| h.wrapping_mul(31).wrapping_add(u32::from(unit)));
    hash % 360
}

fn button_color(button: &ButtonConfig) -> String {
    match &button.color {
        Some(color) => color.clone(),
        None => format!("hsl({} 68% 46%)", name_hue(&button.name)),
    }
}

/// Escape text for use in HTML content and double-quoted attributes.
pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn tile(label: &str, action: &str, color: &str) -> String {
    format!(
        r#"<button class="tile" data-action="{}" style="--bg: {}"><span>{}</span></button>"#,
        escape_html(action),
        escape_html(color),
        escape_html(label)
    )
}

pub(crate) fn render_control_page(buttons: &[ButtonConfig], presets: &[PresetButton]) -> String {
    let mut tiles = String::new();

    for button in buttons {
        tiles.push_str(&tile(
            button.label(),
            &button_action(button),
            &button_color(button),
        ));
        tiles.push('\n');
    }

    for preset in presets {
        tiles.push_str(&tile(
            &preset.title,
            &format!("/api/command-preset/{}", preset.slot),
            PRESET_COLOR,
        ));
        tiles.push('\n');
    }

    format!("{}{}{}", PAGE_HEAD, tiles, PAGE_TAIL)
}

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0, maximum-scale=1, user-scalable=no" />
    <title>FPPControl</title>
    <style>
      :root { color-scheme: light dark; }
      html, body { height: 100%; }
      body { margin: 0; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif; background: #111; color: #eee; }
      .wrap { min-height: 100vh; max-height: 100vh; display: grid; grid-template-rows: 1fr auto; }
      .grid { display: grid; grid-template-columns: repeat(4, 1fr); grid-auto-rows: 1fr; gap: 0.75rem; padding: 0.75rem; }
      .tile { display: flex; align-items: center; justify-content: center; width: 100%; border: none; border-radius: 12px; background: var(--bg, #2a2a2a); color: #fff; cursor: pointer; user-select: none; -webkit-tap-highlight-color: rgba(0,0,0,0); touch-action: manipulation; box-shadow: 0 2px 6px rgba(0,0,0,0.4); transition: transform 80ms ease-out, filter 80ms ease-out; }
      .tile:active { transform: scale(0.98); filter: brightness(0.8); }
      .tile:disabled { filter: brightness(0.6); }
      .tile span { font-size: clamp(1rem, 4.2vw, 2rem); font-weight: 600; letter-spacing: 0.5px; text-align: center; padding: 0 0.5rem; }
      .status { padding: 0.5rem 1rem 1rem; text-align: center; min-height: 2rem; color: #7bd88f; }
      .error { color: #ff7b7b; }
      @media (orientation: landscape) {
        .grid { gap: 0.6rem; }
        .tile span { font-size: clamp(0.9rem, 3.2vh, 1.6rem); }
      }
    </style>
  </head>
  <body>
    <div class="wrap">
      <main class="grid">
"#;

const PAGE_TAIL: &str = r#"      </main>
      <div id="status" class="status" aria-live="polite"></div>
    </div>
    <script>
      (function() {
        var statusEl = document.getElementById('status');
        function setStatus(text, isError) {
          statusEl.textContent = text || '';
          statusEl.classList.toggle('error', !!isError);
        }

        function handleClick(e) {
          var btn = e.currentTarget;
          var action = btn.getAttribute('data-action');
          var label = btn.textContent;
          if (!action) return;
          setStatus('Sending "' + label + '" ...');
          btn.disabled = true;
          fetch(action, { method: 'POST' })
            .then(function(resp) { if (!resp.ok) throw new Error('HTTP ' + resp.status); return resp.text(); })
            .then(function() { setStatus('Sent: ' + label); })
            .catch(function(err) { setStatus('Failed: ' + err.message, true); })
            .finally(function() { btn.disabled = false; });
        }

        Array.prototype.forEach.call(document.querySelectorAll('.tile'), function(btn) {
          btn.addEventListener('click', handleClick, { passive: true });
        });
      })();
    </script>
  </body>
</html>
"#;
