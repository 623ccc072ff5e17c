//! Global CSS styles for Katadeck.
//!
//! Light theme by default; every region carrying `.dark-mode` switches
//! independently (body, navbar, each nav link, the toggle control).

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* LIGHT (default) */
  --paper: #fafaf7;
  --paper-raised: #ffffff;
  --paper-border: #e4e2dc;
  --ink: #1f2328;
  --ink-secondary: rgba(31, 35, 40, 0.7);
  --ink-muted: rgba(31, 35, 40, 0.5);

  /* DARK */
  --night: #14161a;
  --night-raised: #1c1f24;
  --night-border: #2a2e34;
  --chalk: #e8e6e3;
  --chalk-secondary: rgba(232, 230, 227, 0.7);
  --chalk-muted: rgba(232, 230, 227, 0.5);

  /* ACCENT */
  --accent: #2f6fde;
  --accent-dark: #7aa5f0;
  --code-bg: #f0efe9;
  --code-bg-dark: #23262c;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', Helvetica, Arial, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  min-height: 100vh;
}

/* === App Body === */
.app-body {
  min-height: 100vh;
  background: var(--paper);
  color: var(--ink);
  transition: background var(--transition-normal), color var(--transition-normal);
}

.app-body.dark-mode {
  background: var(--night);
  color: var(--chalk);
}

/* === Navbar === */
.navbar {
  background: var(--paper-raised);
  border-bottom: 1px solid var(--paper-border);
  transition: background var(--transition-normal);
}

.navbar.dark-mode {
  background: var(--night-raised);
  border-bottom: 1px solid var(--night-border);
}

.navbar-inner {
  max-width: 1100px;
  margin: 0 auto;
  padding: 0.75rem 1.5rem;
  display: flex;
  align-items: center;
  gap: 2rem;
}

.app-title {
  font-size: 1.25rem;
  font-weight: 700;
  letter-spacing: 0.02em;
}

/* === Challenge Navigation === */
.challenge-nav {
  flex: 1;
  overflow-x: auto;
}

.challenge-list {
  list-style: none;
  display: flex;
  gap: 0.25rem;
}

.nav-link {
  display: inline-block;
  padding: 0.4rem 0.75rem;
  border-radius: 6px;
  color: var(--ink-secondary);
  text-decoration: none;
  white-space: nowrap;
  transition: color var(--transition-fast), background var(--transition-fast);
}

.nav-link:hover {
  color: var(--accent);
  background: var(--code-bg);
}

.nav-link.dark-mode {
  color: var(--chalk-secondary);
}

.nav-link.dark-mode:hover {
  color: var(--accent-dark);
  background: var(--code-bg-dark);
}

/* === Theme Toggle === */
.mode-toggle {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.25rem;
  height: 2.25rem;
  border: 1px solid var(--paper-border);
  border-radius: 50%;
  background: transparent;
  color: var(--ink-secondary);
  cursor: pointer;
  transition: color var(--transition-fast), border-color var(--transition-fast);
}

.mode-toggle:hover {
  color: var(--accent);
  border-color: var(--accent);
}

.mode-toggle.dark-mode {
  border-color: var(--night-border);
  color: var(--chalk-secondary);
}

.mode-toggle.dark-mode:hover {
  color: var(--accent-dark);
  border-color: var(--accent-dark);
}

/* === Content Region === */
.content-area {
  max-width: 820px;
  margin: 0 auto;
  padding: 2rem 1.5rem 4rem;
  line-height: 1.7;
}

.content-message {
  margin-top: 2rem;
  text-align: center;
  color: var(--ink-muted);
}

.dark-mode .content-message {
  color: var(--chalk-muted);
}

.loading-state {
  margin-top: 2rem;
  text-align: center;
}

.loading-message {
  color: var(--ink-muted);
  font-style: italic;
}

.dark-mode .loading-message {
  color: var(--chalk-muted);
}

/* === Rendered Markdown === */
.challenge-content h1,
.challenge-content h2,
.challenge-content h3 {
  margin: 1.5rem 0 0.75rem;
  line-height: 1.3;
}

.challenge-content p,
.challenge-content ul,
.challenge-content ol {
  margin-bottom: 1rem;
}

.challenge-content ul,
.challenge-content ol {
  padding-left: 1.5rem;
}

.challenge-content a {
  color: var(--accent);
}

.dark-mode .challenge-content a {
  color: var(--accent-dark);
}

.challenge-content code {
  font-family: var(--font-mono);
  font-size: 0.875em;
  background: var(--code-bg);
  padding: 0.15em 0.35em;
  border-radius: 4px;
}

.challenge-content pre {
  background: var(--code-bg);
  padding: 1rem;
  border-radius: 8px;
  overflow-x: auto;
  margin-bottom: 1rem;
}

.challenge-content pre code {
  background: none;
  padding: 0;
}

.dark-mode .challenge-content code,
.dark-mode .challenge-content pre {
  background: var(--code-bg-dark);
}

.challenge-content table {
  border-collapse: collapse;
  margin-bottom: 1rem;
}

.challenge-content th,
.challenge-content td {
  border: 1px solid var(--paper-border);
  padding: 0.4rem 0.75rem;
}

.dark-mode .challenge-content th,
.dark-mode .challenge-content td {
  border-color: var(--night-border);
}

.challenge-content blockquote {
  border-left: 3px solid var(--paper-border);
  padding-left: 1rem;
  color: var(--ink-secondary);
  margin-bottom: 1rem;
}

.dark-mode .challenge-content blockquote {
  border-left-color: var(--night-border);
  color: var(--chalk-secondary);
}
"#;
