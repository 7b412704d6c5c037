//! Page markup and stylesheet.
//!
//! [`PAGE`] holds `{{name}}` placeholders filled by [`render`] in a single
//! pass, so substituted values are never scanned for placeholders again.

/// Stylesheet inlined into the page head.
pub const STYLE: &str = r#"
    *{box-sizing:border-box;margin:0;padding:0;}
    :root{--orange:#FF5722;--dark:#0D0D0D;--card:#1A1A1A;--text:#F0F0F0;--muted:#888;--border:#2A2A2A;--green:#00C853;--red:#FF1744;}
    body{background:var(--dark);color:var(--text);font-family:'Segoe UI',system-ui,sans-serif;min-height:100vh;}
    .topbar{background:#111;border-bottom:1px solid var(--border);padding:8px 24px;display:flex;justify-content:space-between;align-items:center;flex-wrap:wrap;gap:8px;}
    .topbar-date{color:var(--muted);font-size:12px;}
    .topbar-links{display:flex;gap:20px;}
    .topbar-links a{color:var(--muted);font-size:12px;text-decoration:none;}
    .topbar-links a:hover{color:var(--orange);}
    header{background:#111;border-bottom:2px solid var(--border);padding:28px 24px 20px;text-align:center;}
    .logo{font-size:72px;font-weight:900;letter-spacing:-4px;color:#fff;line-height:1;}
    .logo span{color:var(--orange);}
    .tagline{color:var(--muted);font-size:13px;letter-spacing:3px;text-transform:uppercase;margin-top:6px;}
    .header-sub{color:#555;font-size:12px;margin-top:8px;}
    .ticker{background:var(--orange);padding:8px 0;overflow:hidden;white-space:nowrap;}
    .ticker-inner{display:inline-block;animation:ticker 50s linear infinite;}
    .ticker-inner span{font-size:13px;font-weight:700;color:#fff;padding:0 32px;}
    .ticker-inner .sep{color:rgba(255,255,255,0.4);padding:0 8px;}
    @keyframes ticker{0%{transform:translateX(0);}100%{transform:translateX(-50%);}}
    nav{background:#111;border-bottom:1px solid var(--border);position:sticky;top:0;z-index:100;}
    .nav-inner{max-width:1140px;margin:0 auto;display:flex;overflow-x:auto;scrollbar-width:none;}
    .nav-inner::-webkit-scrollbar{display:none;}
    .nav-item{padding:14px 20px;font-size:13px;font-weight:700;text-transform:uppercase;letter-spacing:0.5px;color:var(--muted);white-space:nowrap;border-bottom:3px solid transparent;text-decoration:none;transition:all 0.2s;}
    .nav-item:hover,.nav-item.active{color:var(--orange);border-bottom-color:var(--orange);}
    .container{max-width:1140px;margin:0 auto;padding:32px 20px;}
    .section-label{font-size:11px;font-weight:800;letter-spacing:2px;text-transform:uppercase;color:var(--muted);margin-bottom:16px;display:flex;align-items:center;gap:12px;}
    .section-label::after{content:'';flex:1;height:1px;background:var(--border);}
    .hero-grid{display:grid;grid-template-columns:1.6fr 1fr;gap:20px;margin-bottom:36px;}
    @media(max-width:768px){.hero-grid{grid-template-columns:1fr;}}
    .card{background:var(--card);border:1px solid var(--border);border-radius:16px;overflow:hidden;cursor:pointer;transition:border-color 0.2s,transform 0.2s;}
    .card:hover{border-color:var(--orange);transform:translateY(-2px);}
    .card-emoji{height:150px;display:flex;align-items:center;justify-content:center;font-size:72px;background:linear-gradient(135deg,#111,#1a1a1a);}
    .card-body{padding:20px;}
    .badge{display:inline-block;padding:4px 10px;border-radius:20px;font-size:10px;font-weight:800;letter-spacing:0.5px;text-transform:uppercase;margin-bottom:10px;margin-right:4px;}
    .b-india{background:#3D1A0A;color:#FF8C42;} .b-biz{background:#0A1A2A;color:#4DB6E0;}
    .b-sports{background:#0A2A15;color:#4CAF50;} .b-tech{background:#1A0A2A;color:#CE93D8;}
    .b-life{background:#2A1A0A;color:#FFB74D;} .b-breaking{background:var(--red);color:#fff;}
    .card-headline{font-size:20px;font-weight:800;line-height:1.3;margin-bottom:10px;color:#fff;}
    .card-body-sm .card-headline{font-size:16px;}
    .card-text{font-size:14px;color:#aaa;line-height:1.7;margin-bottom:14px;}
    .card-body-sm .card-text{font-size:13px;}
    .why-box{background:#111;border-left:3px solid var(--orange);border-radius:0 8px 8px 0;padding:10px 14px;font-size:13px;color:#ccc;line-height:1.5;}
    .why-box strong{color:var(--orange);}
    .card-footer{display:flex;justify-content:space-between;align-items:center;margin-top:14px;padding-top:12px;border-top:1px solid var(--border);flex-wrap:wrap;gap:8px;}
    .read-time{font-size:11px;color:var(--muted);}
    .read-more{font-size:12px;font-weight:700;color:var(--orange);text-decoration:none;}
    .sidebar-stack{display:flex;flex-direction:column;gap:16px;}
    .side-card{background:var(--card);border:1px solid var(--border);border-radius:14px;padding:16px;cursor:pointer;transition:border-color 0.2s;display:flex;gap:14px;align-items:flex-start;}
    .side-card:hover{border-color:var(--orange);}
    .side-emoji{font-size:32px;flex-shrink:0;width:50px;height:50px;display:flex;align-items:center;justify-content:center;border-radius:10px;background:#111;}
    .side-headline{font-size:14px;font-weight:700;line-height:1.35;margin-bottom:6px;color:#fff;}
    .side-text{font-size:12px;color:var(--muted);line-height:1.5;}
    .grid-3{display:grid;grid-template-columns:repeat(3,1fr);gap:20px;margin-bottom:36px;}
    @media(max-width:900px){.grid-3{grid-template-columns:1fr 1fr;}}
    @media(max-width:600px){.grid-3{grid-template-columns:1fr;}}
    .card-sm .card-emoji{height:100px;font-size:48px;}
    .no-stories{color:#888;padding:20px;}
    .subscribe{background:linear-gradient(135deg,#FF5722,#FF8C42);border-radius:20px;padding:40px 32px;text-align:center;margin-bottom:36px;}
    .subscribe h2{font-size:28px;font-weight:900;color:#fff;margin-bottom:8px;}
    .subscribe p{color:rgba(255,255,255,0.85);font-size:15px;margin-bottom:24px;}
    .sub-form{display:flex;gap:10px;max-width:440px;margin:0 auto;flex-wrap:wrap;justify-content:center;}
    .sub-form input{flex:1;min-width:200px;padding:14px 20px;border-radius:30px;border:none;font-size:14px;outline:none;}
    .sub-form button{background:#0D0D0D;color:#fff;border:none;padding:14px 24px;border-radius:30px;font-size:14px;font-weight:800;cursor:pointer;}
    footer{background:#111;border-top:1px solid var(--border);padding:40px 24px;text-align:center;}
    .footer-logo{font-size:36px;font-weight:900;color:#fff;letter-spacing:-2px;margin-bottom:8px;}
    .footer-logo span{color:var(--orange);}
    .footer-links{display:flex;justify-content:center;gap:24px;margin:16px 0;flex-wrap:wrap;}
    .footer-links a{color:var(--muted);font-size:13px;text-decoration:none;}
    .footer-links a:hover{color:var(--orange);}
    .footer-text{color:var(--muted);font-size:13px;line-height:1.8;}
    .updated-pill{display:inline-flex;align-items:center;gap:6px;background:#111;border:1px solid var(--border);border-radius:20px;padding:6px 14px;font-size:12px;color:var(--muted);margin-bottom:24px;}
    .pulse{width:8px;height:8px;background:var(--green);border-radius:50%;animation:pulse 1.5s infinite;flex-shrink:0;}
    @keyframes pulse{0%,100%{opacity:1;}50%{opacity:0.3;}}
"#;

/// Full page skeleton.
pub const PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8"/>
  <meta name="viewport" content="width=device-width, initial-scale=1.0"/>
  <meta name="description" content="DUH - India's news, so simple you'll go duh. No jargon, no drama."/>
  <title>DUH - India's Simplest News</title>
  <style>{{style}}  </style>
</head>
<body>

<div class="topbar">
  <span class="topbar-date">☀️ {{date}}</span>
  <div class="topbar-links">
    <a href="#">About</a>
    <a href="#">Subscribe</a>
    <a href="#">Archive</a>
  </div>
</div>

<header>
  <div class="logo">d<span>u</span>h</div>
  <div class="tagline">News so simple, you'll go duh</div>
  <div class="header-sub">India's most honest, jargon-free daily news</div>
</header>

<div class="ticker">
  <div class="ticker-inner">
    {{ticker}}
  </div>
</div>

<nav>
  <div class="nav-inner">
    <a class="nav-item active" href="#">🏠 Today</a>
    <a class="nav-item" href="#">🇮🇳 India</a>
    <a class="nav-item" href="#">🌍 World</a>
    <a class="nav-item" href="#">💼 Business</a>
    <a class="nav-item" href="#">🏏 Sports</a>
    <a class="nav-item" href="#">📱 Tech</a>
    <a class="nav-item" href="#">🎬 Entertainment</a>
  </div>
</nav>

<div class="container">

  <div class="updated-pill">
    <div class="pulse"></div>
    <span>Updated today at {{time}} IST &nbsp;·&nbsp; <span class="story-count">{{total}}</span> stories</span>
  </div>

  <div class="section-label">🔥 Today's biggest story</div>
  <div class="hero-grid">
    {{hero}}
    <div class="sidebar-stack">
      {{sidebar}}
    </div>
  </div>

  <div class="section-label">📰 More stories today</div>
  <div class="grid-3">
    {{grid}}
  </div>

  <div class="subscribe">
    <h2>☀️ Get DUH in your inbox every morning</h2>
    <p>Join thousands of Indians who start their day with news that actually makes sense. Free, always.</p>
    <div class="sub-form">
      <input type="email" placeholder="your@email.com"/>
      <button>Subscribe Free →</button>
    </div>
  </div>

</div>

<footer>
  <div class="footer-logo">d<span>u</span>h</div>
  <div class="footer-links">
    <a href="#">Home</a>
    <a href="#">About</a>
    <a href="#">Subscribe</a>
    <a href="#">Contact</a>
  </div>
  <div class="footer-text">
    News so simple, you'll go duh · Updated daily at 7am IST · duh.co.in<br/><br/>
    <span style="font-size:11px;color:#444;">Not financial advice. Not legal advice. Just news, made human.</span>
  </div>
</footer>

</body>
</html>
"##;

/// Replace every `{{name}}` in `template` with its value from `vars`.
///
/// Unknown placeholders are left as-is.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + vars.iter().map(|(_, v)| v.len()).sum::<usize>());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let name = &after[..end];
                match vars.iter().find(|(k, _)| *k == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push_str("{{");
                        out.push_str(name);
                        out.push_str("}}");
                    }
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_once() {
        let out = render("a {{x}} b {{y}} c", &[("x", "{{y}}"), ("y", "Y")]);
        assert_eq!(out, "a {{y}} b Y c");
    }

    #[test]
    fn test_render_keeps_unknown_and_unclosed() {
        assert_eq!(render("{{nope}} and {{open", &[]), "{{nope}} and {{open");
    }

    #[test]
    fn test_page_has_every_placeholder() {
        for name in ["style", "date", "ticker", "time", "total", "hero", "sidebar", "grid"] {
            assert!(PAGE.contains(&format!("{{{{{name}}}}}")), "missing {name}");
        }
    }
}
