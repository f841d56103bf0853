//! Page HTML template
//!
//! Contains the main page structure including:
//! - Sidebar navigation and header with the live price
//! - Chat, analytics, portfolio and market sections
//! - Purchase and success modals
//!
//! Portfolio and market only exist in the INR profile.

use crate::config::Profile;

const NAV_EXTENDED: &str = r##"
                <a href="#" class="nav-item" data-section="portfolio">💼 Portfolio</a>
                <a href="#" class="nav-item" data-section="market">📈 Market</a>"##;

const CHAT_SECTION: &str = r#"
            <section class="content-section active" id="section-chat">
                <div class="chat-messages" id="chatMessages">
                    <div class="message bot-message">
                        <div class="message-avatar">🤖</div>
                        <div class="message-bubble">
                            <div class="message-content">Hello! I'm your gold investment assistant. Ask me anything about digital gold.</div>
                        </div>
                    </div>
                </div>
                <div class="chat-input">
                    <input type="text" id="messageInput" placeholder="Ask about gold investment..." autocomplete="off">
                    <button class="btn btn-primary" id="sendButton">Send</button>
                </div>
            </section>"#;

const ANALYTICS_SECTION: &str = r#"
            <section class="content-section" id="section-analytics">
                <div class="grid">
                    <div class="card">
                        <div class="card-title">👥 Total Users</div>
                        <div class="card-value" id="totalUsers">--</div>
                    </div>
                    <div class="card">
                        <div class="card-title">🧾 Transactions</div>
                        <div class="card-value" id="totalTransactions">--</div>
                    </div>
                    <div class="card">
                        <div class="card-title">🪙 Gold Sold</div>
                        <div class="card-value" id="totalGoldSold">--</div>
                    </div>
                    <div class="card">
                        <div class="card-title">💰 Revenue</div>
                        <div class="card-value" id="totalRevenue">--</div>
                    </div>
                </div>
            </section>"#;

const EXTENDED_SECTIONS: &str = r#"
            <section class="content-section" id="section-portfolio">
                <div class="card">
                    <div class="card-header">
                        <span class="card-title">💼 My Holdings</span>
                        <button class="btn btn-secondary" id="refreshPortfolio">🔄 Refresh</button>
                    </div>
                    <div id="portfolioHoldings">
                        <div class="empty-state">No holdings yet. Start a purchase from the chat.</div>
                    </div>
                </div>
            </section>

            <section class="content-section" id="section-market">
                <div class="card">
                    <div class="card-title">📈 Gold Price</div>
                    <div class="card-value" id="marketPrice">--</div>
                    <div class="metrics">
                        <div class="metric">
                            <div class="metric-label">Currency</div>
                            <div class="metric-value" id="marketCurrency">--</div>
                        </div>
                        <div class="metric">
                            <div class="metric-label">Last Updated</div>
                            <div class="metric-value" id="marketUpdated">--</div>
                        </div>
                    </div>
                </div>
            </section>"#;

const MODALS: &str = r#"
    <div class="modal" id="purchaseModal">
        <div class="modal-content">
            <div class="modal-header">
                <h2>🪙 Buy Digital Gold</h2>
                <button class="modal-close" id="closePurchaseModal">&times;</button>
            </div>
            <form id="purchaseForm">
                <label for="userName">Name</label>
                <input type="text" id="userName" autocomplete="name">
                <label for="userEmail">Email</label>
                <input type="email" id="userEmail" autocomplete="email">
                <label for="purchaseAmount">Amount</label>
                <input type="number" id="purchaseAmount" min="0" step="any">
                <div class="quote">
                    <div class="quote-row"><span>Gold</span><span><span id="gramsPreview">0.0000</span> g</span></div>
                    <div class="quote-row"><span>GST (3%)</span><span id="gstPreview">--</span></div>
                    <div class="quote-row total"><span>Total</span><span id="totalPreview">--</span></div>
                </div>
                <button type="submit" class="btn btn-primary btn-block">Buy Now</button>
            </form>
        </div>
    </div>

    <div class="modal" id="successModal">
        <div class="modal-content success">
            <div class="success-icon">🎉</div>
            <h2>Purchase Successful!</h2>
            <div class="quote">
                <div class="quote-row"><span>Transaction</span><span id="successTransactionId"></span></div>
                <div class="quote-row"><span>Gold</span><span><span id="successGrams"></span> g</span></div>
                <div class="quote-row"><span>Amount</span><span id="successAmount"></span></div>
                <div class="quote-row"><span>GST</span><span id="successGst"></span></div>
                <div class="quote-row total"><span>Total</span><span id="successTotal"></span></div>
                <div class="quote-row"><span>Price</span><span id="successPrice"></span></div>
            </div>
            <button class="btn btn-primary btn-block" id="closeSuccessModal">Done</button>
        </div>
    </div>"#;

/// Body markup for a profile
pub fn template(profile: Profile) -> String {
    let (nav_extended, extended_sections) = if profile.has_extended_sections() {
        (NAV_EXTENDED, EXTENDED_SECTIONS)
    } else {
        ("", "")
    };

    format!(
        r##"
    <div class="container">
        <aside class="sidebar">
            <div class="logo">🪙 Gold Assistant</div>
            <nav>
                <a href="#" class="nav-item active" data-section="chat">💬 Chat</a>
                <a href="#" class="nav-item" data-section="analytics">📊 Analytics</a>{nav_extended}
            </nav>
        </aside>

        <main>
            <header>
                <div>
                    <h1 id="sectionTitle">Gold Investment Assistant</h1>
                    <span class="subtitle" id="sectionSubtitle">Ask me anything about digital gold</span>
                </div>
                <div class="header-controls">
                    <span class="price-badge" id="goldPrice">{price}</span>
                    <button class="btn btn-primary" id="openPurchaseButton">💰 Buy Gold</button>
                </div>
            </header>
{CHAT_SECTION}
{ANALYTICS_SECTION}
{extended_sections}
        </main>
    </div>
{MODALS}
"##,
        price = profile.price_placeholder(),
    )
}
