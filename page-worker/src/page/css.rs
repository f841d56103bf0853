//! Page CSS styles
//!
//! Gold-on-dark theme built on CSS custom properties. Visibility of
//! sections and modals is driven by the `active` class the client
//! toggles.

pub const STYLES: &str = r"
* { box-sizing: border-box; margin: 0; padding: 0; }

:root {
    --bg: #0f0d08;
    --card: #1a1710;
    --border: #3a3220;
    --text: #ece3cf;
    --text-dim: #9a8f78;
    --gold: #d4af37;
    --gold-dark: #b8962e;
    --green: #3fb950;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    min-height: 100vh;
}

.container { display: flex; min-height: 100vh; }

/* Sidebar */
.sidebar {
    width: 220px;
    background: var(--card);
    border-right: 1px solid var(--border);
    padding: 20px 12px;
}

.logo { font-size: 18px; font-weight: 700; color: var(--gold); margin-bottom: 24px; padding: 0 8px; }

.nav-item {
    display: block;
    padding: 10px 12px;
    border-radius: 8px;
    color: var(--text-dim);
    text-decoration: none;
    margin-bottom: 4px;
}

.nav-item:hover { background: rgba(212, 175, 55, 0.08); }
.nav-item.active { background: rgba(212, 175, 55, 0.15); color: var(--gold); }

main { flex: 1; display: flex; flex-direction: column; padding: 20px; min-width: 0; }

/* Header */
header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 20px;
    padding-bottom: 16px;
    border-bottom: 1px solid var(--border);
}

h1 { font-size: 22px; font-weight: 600; }
.subtitle { font-size: 13px; color: var(--text-dim); }

.header-controls { display: flex; align-items: center; gap: 12px; }

.price-badge {
    padding: 6px 12px;
    border-radius: 20px;
    font-size: 13px;
    font-weight: 600;
    background: rgba(212, 175, 55, 0.15);
    color: var(--gold);
}

/* Buttons */
.btn {
    padding: 8px 16px;
    border-radius: 6px;
    border: none;
    font-size: 13px;
    font-weight: 500;
    cursor: pointer;
    transition: all 0.2s;
}

.btn-primary { background: var(--gold); color: #1a1405; }
.btn-primary:hover { background: var(--gold-dark); }
.btn-secondary { background: var(--border); color: var(--text); }
.btn-block { width: 100%; margin-top: 16px; padding: 12px; }

/* Sections */
.content-section { display: none; flex: 1; flex-direction: column; min-height: 0; }
.content-section.active { display: flex; }

/* Chat */
.chat-messages { flex: 1; overflow-y: auto; padding: 8px 0; }

.message { display: flex; gap: 10px; margin-bottom: 14px; max-width: 80%; }
.user-message { margin-left: auto; flex-direction: row-reverse; }

.message-avatar { font-size: 22px; }

.message-bubble {
    background: var(--card);
    border: 1px solid var(--border);
    border-radius: 12px;
    padding: 10px 14px;
}

.user-message .message-bubble { background: rgba(212, 175, 55, 0.15); }
.message-content { line-height: 1.5; }
.message-time { font-size: 11px; color: var(--text-dim); margin-top: 6px; }

.cta-invest {
    margin-top: 10px;
    padding: 6px 12px;
    border: 1px solid var(--gold);
    border-radius: 6px;
    background: transparent;
    color: var(--gold);
    cursor: pointer;
}

.typing .dot {
    display: inline-block;
    width: 6px;
    height: 6px;
    margin-right: 4px;
    border-radius: 50%;
    background: var(--text-dim);
    animation: blink 1.2s infinite;
}

.typing .dot:nth-child(2) { animation-delay: 0.2s; }
.typing .dot:nth-child(3) { animation-delay: 0.4s; }

@keyframes blink { 0%, 80%, 100% { opacity: 0.3; } 40% { opacity: 1; } }

.chat-input { display: flex; gap: 10px; padding-top: 12px; }

input {
    flex: 1;
    width: 100%;
    padding: 10px 12px;
    border-radius: 6px;
    border: 1px solid var(--border);
    background: var(--bg);
    color: var(--text);
}

/* Cards */
.grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
    gap: 16px;
}

.card {
    background: var(--card);
    border: 1px solid var(--border);
    border-radius: 12px;
    padding: 20px;
}

.card-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px; }

.card-title {
    font-size: 13px;
    color: var(--text-dim);
    text-transform: uppercase;
    letter-spacing: 0.5px;
}

.card-value { font-size: 28px; font-weight: 700; margin-top: 8px; }

.metrics { display: flex; flex-wrap: wrap; gap: 16px; margin-top: 12px; }
.metric { flex: 1; min-width: 100px; }
.metric-label { font-size: 11px; color: var(--text-dim); text-transform: uppercase; }
.metric-value { font-size: 16px; font-weight: 600; margin-top: 2px; }

.holding-grams { font-size: 28px; font-weight: 700; color: var(--gold); margin-bottom: 12px; }
.holding-row, .quote-row { display: flex; justify-content: space-between; padding: 4px 0; font-size: 13px; }
.holding-status { margin-top: 8px; color: var(--green); text-transform: capitalize; }
.empty-state { color: var(--text-dim); padding: 20px 0; text-align: center; }

/* Modals */
.modal {
    display: none;
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.6);
    align-items: center;
    justify-content: center;
}

.modal.active { display: flex; }

.modal-content {
    background: var(--card);
    border: 1px solid var(--border);
    border-radius: 12px;
    padding: 24px;
    width: 90%;
    max-width: 420px;
}

.modal-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px; }
.modal-close { background: none; border: none; color: var(--text-dim); font-size: 24px; cursor: pointer; }

label { display: block; font-size: 12px; color: var(--text-dim); margin: 12px 0 4px; }

.quote {
    background: rgba(212, 175, 55, 0.08);
    border-radius: 8px;
    padding: 12px;
    margin-top: 16px;
}

.quote-row.total { font-weight: 700; border-top: 1px solid var(--border); margin-top: 4px; padding-top: 8px; }

.success { text-align: center; }
.success .quote { text-align: left; }
.success-icon { font-size: 48px; margin-bottom: 8px; }

/* Responsive */
@media (max-width: 700px) {
    .container { flex-direction: column; }
    .sidebar { width: 100%; border-right: none; border-bottom: 1px solid var(--border); }
    nav { display: flex; overflow-x: auto; gap: 4px; }
    header { flex-direction: column; gap: 12px; }
}
";
