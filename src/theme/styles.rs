//! Global CSS styles for LinkDeck.
//!
//! Dark glass panels over a deep blue gradient; one accent for actions,
//! one for danger.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --bg-deep: #0b1220;
  --bg-mid: #13213a;
  --glass: rgba(255, 255, 255, 0.08);
  --glass-strong: rgba(255, 255, 255, 0.16);
  --glass-border: rgba(255, 255, 255, 0.18);

  /* ACCENTS */
  --accent: #5b9dff;
  --accent-soft: rgba(91, 157, 255, 0.22);
  --ok: #4ade80;
  --danger: #f87171;
  --danger-soft: rgba(248, 113, 113, 0.2);
  --flash: #e9b949;

  /* TEXT */
  --text-primary: #f5f7fb;
  --text-secondary: rgba(220, 232, 255, 0.75);
  --text-muted: rgba(220, 232, 255, 0.5);

  --radius: 12px;
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;
}

* { box-sizing: border-box; }

body {
  margin: 0;
  min-height: 100vh;
  font-family: var(--font-sans);
  color: var(--text-primary);
  background: linear-gradient(135deg, var(--bg-deep), var(--bg-mid));
}

/* === Buttons === */
.btn-primary, .btn-secondary, .btn-danger, .btn-ghost {
  border-radius: 8px;
  padding: 0.5rem 1rem;
  font: inherit;
  cursor: pointer;
  border: 1px solid var(--glass-border);
  color: var(--text-primary);
  transition: background 0.2s, border-color 0.2s;
}
.btn-primary { background: var(--accent); border-color: var(--accent); }
.btn-primary:hover { filter: brightness(1.1); }
.btn-secondary { background: var(--glass); }
.btn-secondary:hover { background: var(--glass-strong); }
.btn-danger { background: var(--danger-soft); border-color: var(--danger); color: var(--danger); }
.btn-ghost { background: transparent; }
.btn-ghost:hover { background: var(--glass); }
button:disabled { opacity: 0.5; cursor: not-allowed; }

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2rem;
  height: 2rem;
  border-radius: 8px;
  border: none;
  background: var(--glass);
  color: var(--text-primary);
  cursor: pointer;
}
.icon-btn:hover { background: var(--glass-strong); }
.icon-btn.danger { background: var(--danger-soft); color: var(--danger); }
.icon-btn.copied { color: var(--ok); }
.icon-btn.qr-btn { background: var(--accent-soft); }

/* === Layout === */
.home { max-width: 1100px; margin: 0 auto; padding: 1.5rem; }

.toolbar {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 1.5rem;
}
.app-title { margin: 0; font-size: 1.75rem; }
.toolbar__actions { display: flex; gap: 0.5rem; }

.banner { padding: 0.75rem; border-radius: 8px; font-size: 0.9rem; margin-bottom: 1rem; }
.banner--error { background: var(--danger-soft); border: 1px solid var(--danger); color: #fecaca; }
.banner--info { background: var(--accent-soft); border: 1px solid var(--accent); text-align: center; }

/* === Groups === */
.group-section {
  border: 1px dashed transparent;
  border-radius: var(--radius);
  padding: 0.75rem;
  margin-bottom: 1rem;
}
.group-section.drop-hover { border-color: var(--accent); background: var(--accent-soft); }
.group-section__header { display: flex; align-items: center; gap: 0.5rem; margin-bottom: 0.75rem; }
.group-section__title { margin: 0; font-size: 1.1rem; }
.group-section__count { color: var(--text-muted); font-size: 0.85rem; flex: 1; }
.group-section__empty { color: var(--text-muted); font-size: 0.9rem; }

.link-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
  gap: 1rem;
}

.new-group { display: flex; gap: 0.5rem; margin-top: 1rem; }

/* === Link Card === */
.link-card {
  display: flex;
  flex-direction: column;
  min-height: 130px;
  padding: 1rem;
  border-radius: var(--radius);
  background: var(--glass);
  border: 1px solid var(--glass-border);
  cursor: pointer;
  transition: transform 0.2s, background 0.2s;
}
.link-card:hover { background: var(--glass-strong); transform: scale(1.02); }
.link-card.dragging { opacity: 0.5; transform: scale(0.95); }
.link-card__top { display: flex; justify-content: space-between; align-items: flex-start; }
.link-card__identity { display: flex; gap: 0.5rem; align-items: center; }
.link-card__favicon {
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 8px;
  background: var(--glass);
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
}
.link-card__favicon img { width: 1.75rem; height: 1.75rem; object-fit: contain; }
.link-card__glyph { color: var(--accent); font-size: 1.25rem; }
.link-card__actions { display: flex; gap: 0.25rem; opacity: 0; transition: opacity 0.2s; }
.link-card:hover .link-card__actions { opacity: 1; }
.link-card__body { margin-top: auto; }
.link-card__title { margin: 0.5rem 0 0; font-size: 1.05rem; line-height: 1.25; }
.link-card__description { margin: 0.25rem 0 0; color: var(--text-secondary); font-size: 0.8rem; }
.link-card__domain { margin: 0.25rem 0 0; color: var(--text-muted); font-size: 0.75rem; font-family: var(--font-mono); }

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 40;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.7);
  backdrop-filter: blur(4px);
}
.modal-panel {
  width: min(520px, calc(100% - 2rem));
  max-height: 90vh;
  overflow-y: auto;
  background: var(--bg-mid);
  border: 1px solid var(--glass-border);
  border-radius: var(--radius);
}
.modal-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 1rem;
  border-bottom: 1px solid var(--glass-border);
}
.modal-title { margin: 0; font-size: 1.25rem; }
.modal-body { padding: 1rem; }
.modal-actions { display: flex; gap: 0.5rem; justify-content: flex-end; margin-top: 1rem; }

.link-editor { display: flex; flex-direction: column; gap: 0.35rem; }
.link-editor label { color: var(--text-secondary); font-size: 0.85rem; margin-top: 0.5rem; }
.field {
  padding: 0.55rem 0.75rem;
  border-radius: 8px;
  border: 1px solid var(--glass-border);
  background: rgba(0, 0, 0, 0.25);
  color: var(--text-primary);
  font: inherit;
}
.field.invalid { border-color: var(--danger); }
.error-text { color: var(--danger); font-size: 0.85rem; margin: 0.25rem 0 0; }

/* === QR display === */
.qr-code-container { display: flex; flex-direction: column; align-items: center; gap: 0.75rem; }
.qr-code-image { border-radius: 8px; background: #f7f4ea; padding: 0.5rem; }
.qr-code-caption { color: var(--text-secondary); font-family: var(--font-mono); font-size: 0.8rem; word-break: break-all; }
.qr-code-fallback { text-align: center; color: var(--text-secondary); }

/* === Scanner === */
.scanner-overlay { position: fixed; inset: 0; z-index: 50; display: flex; align-items: center; justify-content: center; }
.scanner-backdrop { position: absolute; inset: 0; background: rgba(0, 0, 0, 0.8); backdrop-filter: blur(4px); }
.scanner-panel {
  position: relative;
  width: min(440px, calc(100% - 2rem));
  background: var(--glass);
  border: 1px solid var(--glass-border);
  border-radius: var(--radius);
  overflow: hidden;
}
.scanner-header { display: flex; justify-content: space-between; align-items: center; padding: 1rem; border-bottom: 1px solid var(--glass-border); }
.scanner-title { margin: 0; font-size: 1.25rem; }
.scanner-stage { position: relative; height: 20rem; background: #000; }
.scanner-video, .scanner-outline { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; }
.scanner-outline { pointer-events: none; }
.scanner-frame {
  position: absolute;
  top: 50%;
  left: 50%;
  width: 12rem;
  height: 12rem;
  transform: translate(-50%, -50%);
  border: 2px solid var(--accent);
  border-radius: 8px;
  pointer-events: none;
  overflow: hidden;
}
.corner { position: absolute; width: 1.5rem; height: 1.5rem; border: 4px solid var(--accent); }
.corner.tl { top: 0; left: 0; border-right: none; border-bottom: none; }
.corner.tr { top: 0; right: 0; border-left: none; border-bottom: none; }
.corner.bl { bottom: 0; left: 0; border-right: none; border-top: none; }
.corner.br { bottom: 0; right: 0; border-left: none; border-top: none; }
.scan-line {
  position: absolute;
  width: 100%;
  height: 2px;
  background: linear-gradient(90deg, transparent, var(--accent), transparent);
  animation: scan 2s ease-in-out infinite;
}
@keyframes scan { 0%, 100% { top: 0; } 50% { top: calc(100% - 2px); } }
.flash-btn {
  position: absolute;
  top: 1rem;
  right: 1rem;
  width: 2.75rem;
  height: 2.75rem;
  border-radius: 50%;
  border: none;
  background: var(--glass-strong);
  color: var(--text-primary);
  cursor: pointer;
}
.flash-btn.on { background: var(--flash); color: #1f1600; }
.scanner-no-camera { height: 100%; display: flex; flex-direction: column; align-items: center; justify-content: center; background: #1f2937; }
.scanner-no-camera__title { font-size: 1.1rem; margin: 0 0 0.25rem; }
.scanner-no-camera__hint { color: var(--text-secondary); font-size: 0.85rem; margin: 0; }
.scanner-footer { padding: 1rem; }
.scanner-footer .banner { margin-bottom: 0.75rem; }
.scanner-status { display: flex; align-items: center; justify-content: center; gap: 0.5rem; color: var(--ok); font-size: 0.85rem; }
.pulse-dot { width: 0.5rem; height: 0.5rem; border-radius: 50%; background: var(--ok); animation: pulse 1.2s infinite; }
@keyframes pulse { 50% { opacity: 0.3; } }

/* === Settings === */
.settings-body { display: flex; flex-direction: column; gap: 1.25rem; }
.section-title { margin: 0 0 0.5rem; font-size: 1rem; }
.data-manager__counts { color: var(--text-secondary); font-size: 0.85rem; margin: 0 0 0.75rem; }
.data-manager__actions { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.status { font-size: 0.85rem; margin: 0.75rem 0 0; }
.status--ok { color: var(--ok); }
.status--error { color: var(--danger); }
.settings-help { background: var(--accent-soft); border: 1px solid var(--glass-border); border-radius: 8px; padding: 1rem; }
.settings-help h4 { margin: 0 0 0.5rem; }
.settings-help ul { margin: 0; padding-left: 1.1rem; color: var(--text-secondary); font-size: 0.85rem; }
"#;
