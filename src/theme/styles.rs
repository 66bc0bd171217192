//! Global CSS styles for Multiverse Explorer.
//!
//! Dark zinc surfaces, portal-green glows, green-to-blue action gradients.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* ZINC (Surfaces) */
  --zinc-950: #09090b;
  --zinc-900: #18181b;
  --zinc-800: #27272a;
  --zinc-700: #3f3f46;
  --zinc-500: #71717a;
  --zinc-400: #a1a1aa;

  /* PORTAL (Accents) */
  --portal: #4ade80;
  --portal-deep: #22c55e;
  --portal-glow: rgba(74, 222, 128, 0.6);
  --portal-soft: rgba(74, 222, 128, 0.4);
  --dimension: #3b82f6;
  --dimension-soft: #60a5fa;

  /* STATUS */
  --alive: #86efac;
  --dead: #fca5a5;
  --unknown: #fde047;
  --other: #d8b4fe;

  /* TEXT */
  --text-primary: #ffffff;
  --text-secondary: #d1d5db;
  --text-muted: #a1a1aa;
  --danger: #ef4444;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --spring: cubic-bezier(0.34, 1.56, 0.64, 1);
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
}

body {
  font-family: var(--font-sans);
  background: linear-gradient(135deg, var(--zinc-950), #000);
  color: var(--text-primary);
  min-height: 100vh;
  line-height: 1.5;
}

button {
  font-family: inherit;
  cursor: pointer;
  border: none;
  background: none;
  color: inherit;
}

/* === Buttons === */
.btn-primary {
  width: 100%;
  padding: 0.75rem;
  border-radius: 0.5rem;
  background: #fff;
  color: #000;
  font-weight: 600;
  font-size: 1.125rem;
  box-shadow: 0 4px 6px rgba(0, 0, 0, 0.3);
  transition: all var(--transition-normal);
}

.btn-primary:hover {
  background: #f4f4f5;
  box-shadow: 0 20px 25px rgba(0, 0, 0, 0.4);
}

.btn-portal {
  padding: 0.5rem 1.25rem;
  border-radius: 0.5rem;
  background: linear-gradient(to right, var(--portal-deep), var(--dimension));
  background-size: 200% 100%;
  color: #fff;
  font-weight: 500;
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
  transition: transform var(--transition-fast), box-shadow var(--transition-normal);
}

.btn-portal:hover {
  transform: scale(1.05);
  background-image: linear-gradient(to right, var(--portal-deep), var(--dimension), var(--portal-deep));
  animation: gradient-slide 0.8s ease-in-out infinite alternate;
  box-shadow: 0 0 20px var(--portal-glow);
}

.btn-portal:active {
  transform: scale(0.95);
}

.btn-round {
  padding: 0.75rem 1.5rem;
  border-radius: 9999px;
}

.btn-outline {
  padding: 0.5rem 1.25rem;
  border-radius: 0.375rem;
  background: var(--zinc-800);
  color: var(--portal);
  font-size: 0.875rem;
  font-weight: 500;
  border: 1px solid rgba(34, 197, 94, 0.3);
  transition: all var(--transition-normal);
}

.btn-outline:hover {
  border-color: rgba(34, 197, 94, 0.7);
  box-shadow: 0 4px 6px rgba(34, 197, 94, 0.2);
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  color: rgba(255, 255, 255, 0.7);
  transition: color var(--transition-fast), transform var(--transition-fast);
}

.icon-btn:hover {
  color: #fff;
}

.close-btn {
  padding: 0.5rem;
  border-radius: 9999px;
  background: rgba(0, 0, 0, 0.4);
  color: #fff;
  backdrop-filter: blur(4px);
}

.close-btn:hover {
  background: rgba(0, 0, 0, 0.6);
  transform: scale(1.1);
}

.close-btn:active {
  transform: scale(0.9);
}

/* === Login === */
.login-page {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 0 1rem;
  background: linear-gradient(135deg, #000, var(--zinc-900), var(--zinc-800));
}

.login-panel {
  width: 100%;
  max-width: 28rem;
  padding: 2rem;
  border-radius: 1rem;
  background: rgba(255, 255, 255, 0.05);
  border: 1px solid rgba(255, 255, 255, 0.1);
  backdrop-filter: blur(12px);
  box-shadow: 0 0 30px #00000050;
}

.login-shield {
  display: flex;
  justify-content: center;
  margin-bottom: 1.5rem;
  filter: drop-shadow(0 4px 6px rgba(0, 0, 0, 0.5));
}

.login-title {
  font-size: 2.25rem;
  font-weight: 800;
  text-align: center;
  letter-spacing: -0.025em;
  margin-bottom: 0.25rem;
}

.login-subtitle {
  color: var(--zinc-400);
  text-align: center;
  font-size: 0.875rem;
  margin-bottom: 2rem;
}

.login-form {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.login-error {
  color: var(--danger);
  font-size: 0.875rem;
  font-weight: 500;
  text-align: center;
}

/* === Inputs === */
.form-field .input-label {
  display: block;
  font-size: 0.875rem;
  font-weight: 500;
  margin-bottom: 0.25rem;
  opacity: 0.7;
  transition: opacity var(--transition-fast);
}

.form-field:focus-within .input-label {
  opacity: 1;
}

.input-shell {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem 1rem;
  border-radius: 0.5rem;
  background: rgba(255, 255, 255, 0.05);
  border: 1px solid rgba(255, 255, 255, 0.1);
  transition: box-shadow var(--transition-fast);
}

.input-shell:focus-within {
  box-shadow: 0 0 0 2px var(--dimension);
}

.input-icon {
  display: inline-flex;
  color: rgba(255, 255, 255, 0.7);
}

.input-field {
  flex: 1;
  background: transparent;
  border: none;
  outline: none;
  color: #fff;
  font-size: 1rem;
}

.input-field::placeholder {
  color: var(--zinc-500);
}

/* === Navbar === */
.navbar {
  width: 100%;
  background: linear-gradient(to right, var(--zinc-900), var(--zinc-800), var(--zinc-900));
  border-bottom: 1px solid rgba(34, 197, 94, 0.2);
  box-shadow: 0 10px 15px rgba(34, 197, 94, 0.05);
}

.navbar-inner {
  max-width: 80rem;
  margin: 0 auto;
  padding: 1rem;
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.navbar-brand {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.brand-logo {
  width: 2rem;
  height: 2rem;
  border-radius: 9999px;
  background: var(--portal-deep);
  box-shadow: 0 10px 15px rgba(34, 197, 94, 0.5);
  display: flex;
  align-items: center;
  justify-content: center;
  color: var(--zinc-900);
  font-weight: 700;
  font-size: 1.125rem;
}

.brand-title {
  position: relative;
  font-size: 1.25rem;
  font-weight: 700;
  letter-spacing: 0.05em;
}

.brand-subtitle {
  position: absolute;
  right: 0;
  bottom: -0.75rem;
  color: var(--portal);
  font-weight: 300;
  font-size: 0.75rem;
  letter-spacing: 0.1em;
}

.brand-online {
  position: absolute;
  top: -0.25rem;
  right: -0.75rem;
  width: 0.5rem;
  height: 0.5rem;
  border-radius: 9999px;
  background: var(--portal-deep);
  animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
}

.navbar-actions {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.navbar-links {
  display: flex;
  gap: 1.5rem;
  margin-right: 1.5rem;
}

.navbar-link {
  position: relative;
  color: var(--text-secondary);
  font-size: 0.875rem;
  font-weight: 500;
  text-decoration: none;
  transition: color var(--transition-fast);
}

.navbar-link:hover,
.navbar-link.active {
  color: var(--portal);
}

.navbar-link-underline {
  position: absolute;
  left: 0;
  bottom: -0.25rem;
  width: 0;
  height: 2px;
  background: var(--portal-deep);
  transition: width var(--transition-normal);
}

.navbar-link:hover .navbar-link-underline {
  width: 100%;
}

@media (max-width: 768px) {
  .navbar-links {
    display: none;
  }
}

/* === Card Grid Page === */
.tarjetas-page {
  min-height: 100vh;
}

.tarjetas-main,
.coming-soon {
  max-width: 80rem;
  margin: 0 auto;
  padding: 2rem 1rem;
}

.coming-soon {
  text-align: center;
}

.coming-soon-link {
  display: inline-block;
  margin-top: 1.5rem;
  color: var(--portal);
}

.multiverse-title {
  text-align: center;
  font-size: 3rem;
  font-weight: 800;
  letter-spacing: -0.025em;
  margin-bottom: 2rem;
  background: linear-gradient(to right, var(--portal), var(--dimension));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.grid-status {
  display: flex;
  justify-content: center;
  align-items: center;
  height: 16rem;
}

.empty-state {
  text-align: center;
  color: var(--zinc-400);
  font-size: 1.25rem;
}

.card-grid {
  display: grid;
  grid-template-columns: repeat(1, minmax(0, 1fr));
  gap: 1.5rem;
}

@media (min-width: 640px) { .card-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); } }
@media (min-width: 768px) { .card-grid { grid-template-columns: repeat(3, minmax(0, 1fr)); } }
@media (min-width: 1024px) { .card-grid { grid-template-columns: repeat(4, minmax(0, 1fr)); } }

/* === Spinner === */
.portal-spinner {
  position: relative;
  width: 5rem;
  height: 5rem;
}

.spinner-ring {
  width: 5rem;
  height: 5rem;
  border: 4px solid transparent;
  border-top-color: var(--portal);
  border-right-color: var(--dimension-soft);
  border-bottom-color: #c084fc;
  border-radius: 9999px;
  animation: spin 1s linear infinite;
}

.spinner-core,
.spinner-ping {
  position: absolute;
  top: 50%;
  left: 50%;
  border-radius: 9999px;
  transform: translate(-50%, -50%);
}

.spinner-core {
  width: 3rem;
  height: 3rem;
  background: #000;
}

.spinner-ping {
  width: 2.5rem;
  height: 2.5rem;
  border: 2px solid var(--portal);
  animation: ping 1s cubic-bezier(0, 0, 0.2, 1) infinite;
}

/* === Character Card === */
.character-card {
  position: relative;
  overflow: hidden;
  height: 16rem;
  border-radius: 0.75rem;
  background: linear-gradient(135deg, var(--zinc-900), var(--zinc-950));
  border: 1px solid rgba(255, 255, 255, 0.1);
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
  transition: transform 300ms var(--spring), box-shadow 300ms ease;
}

.character-card:hover {
  transform: translateY(-5px);
  box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.2), 0 10px 10px -5px rgba(0, 0, 0, 0.1);
}

.character-card.pressed {
  transform: scale(0.95);
  transition-duration: 100ms;
}

.card-backdrop,
.card-backdrop-image,
.card-tint,
.card-shade {
  position: absolute;
  inset: 0;
}

.card-backdrop {
  overflow: hidden;
}

.card-backdrop-image {
  opacity: 0.7;
  background-size: cover;
  background-position: center;
  filter: blur(12px);
}

.card-tint.tone-alive { background: linear-gradient(to top, rgba(34, 197, 94, 0.3), rgba(21, 128, 61, 0.1)); }
.card-tint.tone-dead { background: linear-gradient(to top, rgba(239, 68, 68, 0.3), rgba(185, 28, 28, 0.1)); }
.card-tint.tone-unknown { background: linear-gradient(to top, rgba(234, 179, 8, 0.3), rgba(161, 98, 7, 0.1)); }
.card-tint.tone-other { background: linear-gradient(to top, rgba(59, 130, 246, 0.3), rgba(29, 78, 216, 0.1)); }

.card-shade {
  background: linear-gradient(to top, rgba(0, 0, 0, 0.8), transparent);
}

.card-body {
  position: relative;
  height: 100%;
  display: flex;
  flex-direction: column;
  padding: 1rem;
}

.card-portrait {
  align-self: center;
  width: 6rem;
  height: 6rem;
  margin-bottom: 0.75rem;
  border-radius: 9999px;
  overflow: hidden;
  border: 2px solid rgba(255, 255, 255, 0.2);
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
  transition: transform var(--transition-normal);
}

.card-portrait:hover {
  transform: scale(1.05) rotate(3deg);
}

.card-portrait img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.card-text {
  flex-grow: 1;
  text-align: center;
}

.card-name {
  font-size: 1.25rem;
  font-weight: 700;
  margin-bottom: 0.25rem;
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

.card-species {
  font-size: 0.875rem;
  color: #86efac;
  margin-bottom: 1rem;
}

.card-actions {
  display: flex;
  justify-content: center;
}

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  overflow: hidden;
  outline: none;
  animation: fade-in 300ms ease both;
}

.modal-backdrop {
  position: absolute;
  inset: 0;
  background: rgba(0, 0, 0, 0.7);
  backdrop-filter: blur(16px);
}

.character-modal {
  position: relative;
  z-index: 10;
  width: 100%;
  max-width: 42rem;
  border-radius: 1rem;
  overflow: hidden;
  background: var(--zinc-900);
  box-shadow: 0 0 40px var(--portal-soft);
  animation: modal-in 700ms var(--spring) 200ms both;
}

.modal-hero {
  position: relative;
  height: 14rem;
  overflow: hidden;
}

.modal-image {
  width: 100%;
  height: 100%;
  object-fit: cover;
  animation: grow-in 700ms ease both;
}

.modal-hero-fade {
  position: absolute;
  inset: 0;
  background: linear-gradient(to top, var(--zinc-900), transparent, transparent);
}

.modal-status {
  position: absolute;
  top: 1rem;
  right: 1rem;
}

.modal-close {
  position: absolute;
  top: 1rem;
  left: 1rem;
}

.status-badge {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.25rem 0.75rem;
  border-radius: 9999px;
  font-size: 0.875rem;
  font-weight: 500;
}

.status-badge.tone-alive { background: rgba(34, 197, 94, 0.2); color: var(--alive); border: 1px solid rgba(34, 197, 94, 0.3); }
.status-badge.tone-dead { background: rgba(239, 68, 68, 0.2); color: var(--dead); border: 1px solid rgba(239, 68, 68, 0.3); }
.status-badge.tone-other,
.status-badge.tone-unknown { background: rgba(168, 85, 247, 0.2); color: var(--other); border: 1px solid rgba(168, 85, 247, 0.3); }

.status-dot {
  width: 0.5rem;
  height: 0.5rem;
  border-radius: 9999px;
  background: currentColor;
  animation: beat 1s ease-in-out infinite;
}

.modal-info {
  padding: 1.5rem;
}

.modal-name {
  font-size: 1.875rem;
  font-weight: 700;
  margin-bottom: 1.5rem;
  background: linear-gradient(to right, var(--portal), var(--dimension));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
  animation: rise-in 400ms ease 300ms both;
}

.modal-columns {
  display: grid;
  grid-template-columns: 1fr;
  gap: 1rem;
}

@media (min-width: 768px) { .modal-columns { grid-template-columns: 1fr 1fr; } }

.modal-column {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.modal-column.from-left { animation: slide-in-left 400ms ease 400ms both; }
.modal-column.from-right { animation: slide-in-right 400ms ease 400ms both; }

.modal-created {
  margin-top: 1.5rem;
  text-align: center;
  font-size: 0.875rem;
  color: var(--zinc-400);
  animation: rise-in 400ms ease 600ms both;
}

.modal-footer {
  margin-top: 1.5rem;
  display: flex;
  justify-content: center;
  animation: rise-in 400ms ease 700ms both;
}

/* === Info Item === */
.info-item {
  position: relative;
  display: flex;
  align-items: center;
  padding: 0.75rem;
  overflow: hidden;
  border-radius: 0.5rem;
  background: rgba(39, 39, 42, 0.5);
  border: 1px solid rgba(63, 63, 70, 0.5);
  transition: background var(--transition-normal), border-color var(--transition-normal);
  animation: rise-in 400ms ease both;
}

.info-item:hover {
  background: rgba(34, 197, 94, 0.1);
  border-color: rgba(34, 197, 94, 0.3);
}

.info-icon {
  flex-shrink: 0;
  font-size: 1.25rem;
  margin-right: 0.75rem;
}

.info-text {
  flex: 1;
}

.info-label {
  font-size: 0.75rem;
  font-weight: 500;
  color: var(--zinc-400);
}

.info-value {
  font-size: 0.875rem;
  font-weight: 600;
}

.info-sheen {
  position: absolute;
  inset: 0;
  background: linear-gradient(to right, rgba(34, 197, 94, 0.1), rgba(59, 130, 246, 0.1));
  opacity: 0;
  transform: translateX(-100%);
  transition: transform var(--transition-normal), opacity var(--transition-normal);
}

.info-item:hover .info-sheen {
  opacity: 1;
  transform: translateX(0);
}

/* === Portal === */
.portal {
  position: absolute;
  inset: 0;
  z-index: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  pointer-events: none;
  animation: portal-open 500ms ease both;
}

.portal-inner {
  position: relative;
  width: 140%;
  height: 140%;
}

.portal-ring {
  position: absolute;
  inset: 0;
  border-radius: 9999px;
  border: 4px solid var(--portal);
  transform: scale(var(--ring-scale));
  animation-name: ring-spin, ring-breathe;
  animation-timing-function: linear, ease-in-out;
  animation-iteration-count: infinite, infinite;
  animation-direction: normal, alternate;
}

.portal-ring.spin-ccw {
  animation-name: ring-spin-reverse, ring-breathe;
}

.portal-particle {
  position: absolute;
  width: 0.5rem;
  height: 0.5rem;
  border-radius: 9999px;
  background: #86efac;
  animation: drift ease-in-out infinite alternate;
}

.sparkles {
  position: absolute;
  inset: 0;
  overflow: hidden;
}

.sparkle {
  position: absolute;
  width: 0.25rem;
  height: 0.25rem;
  border-radius: 9999px;
  background: var(--portal);
  box-shadow: 0 0 8px 2px rgba(74, 222, 128, 0.8);
  animation: twinkle ease-in-out infinite;
}

/* === Keyframes === */
@keyframes spin { to { transform: rotate(360deg); } }
@keyframes ping { 75%, 100% { transform: translate(-50%, -50%) scale(2); opacity: 0; } }
@keyframes pulse { 50% { opacity: 0.5; } }
@keyframes beat { 50% { transform: scale(1.5); } }
@keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }
@keyframes gradient-slide { from { background-position: left center; } to { background-position: right center; } }

@keyframes modal-in {
  from { transform: scale(0) rotate(-5deg) translateY(100px); }
  to { transform: scale(1) rotate(0deg) translateY(0); }
}

@keyframes grow-in { from { transform: scale(0.5); } to { transform: scale(1); } }
@keyframes rise-in { from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: translateY(0); } }
@keyframes slide-in-left { from { opacity: 0; transform: translateX(-20px); } to { opacity: 1; transform: translateX(0); } }
@keyframes slide-in-right { from { opacity: 0; transform: translateX(20px); } to { opacity: 1; transform: translateX(0); } }

@keyframes portal-open {
  0% { transform: scale(0); opacity: 0; }
  60% { transform: scale(1.2); opacity: 0.8; }
  100% { transform: scale(1); opacity: 1; }
}

@keyframes ring-spin {
  from { rotate: 0deg; }
  to { rotate: 360deg; }
}

@keyframes ring-spin-reverse {
  from { rotate: 0deg; }
  to { rotate: -360deg; }
}

@keyframes ring-breathe {
  from { transform: scale(var(--ring-scale)); }
  to { transform: scale(calc(var(--ring-scale) + 0.02)); }
}

@keyframes drift {
  from { transform: translate(0, 0); opacity: 0.7; }
  to { transform: translate(var(--dx), var(--dy)); opacity: 0; }
}

@keyframes twinkle {
  0%, 100% { opacity: 0; transform: scale(0); }
  50% { opacity: 1; transform: scale(1.5); }
}
"#;
