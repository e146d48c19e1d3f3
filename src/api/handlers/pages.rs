use axum::response::Html;

use crate::catalog;

const INDEX_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>MLB Player Analyzer</title>
<style>
  body { font-family: system-ui, sans-serif; max-width: 860px; margin: 2rem auto; padding: 0 1rem; }
  select, button { font-size: 1rem; padding: 0.4rem; margin-right: 0.5rem; }
  table { border-collapse: collapse; margin-top: 1rem; width: 100%; }
  th, td { border: 1px solid #ccc; padding: 0.3rem 0.6rem; text-align: left; }
  tr.selectable:hover { background: #eef; cursor: pointer; }
  #analysis { white-space: pre-wrap; background: #f7f7f7; padding: 1rem; margin-top: 1rem; }
  .grade { font-size: 1.6rem; font-weight: bold; }
  .error { color: #a00; }
</style>
</head>
<body>
<h1>MLB Player Analyzer</h1>
<p>Pick a team and season, select a player, and get a graded season summary.</p>
<div>
  <select id="team">{{TEAM_OPTIONS}}</select>
  <select id="year">{{YEAR_OPTIONS}}</select>
  <button onclick="loadRoster()">Load roster</button>
</div>
<div id="roster"></div>
<div id="analysis"></div>
<script>
async function getJson(url, options) {
  const res = await fetch(url, options);
  const body = await res.json();
  if (!res.ok) throw new Error(body.error || res.statusText);
  return body;
}

async function loadRoster() {
  const team = document.getElementById('team').value;
  const year = document.getElementById('year').value;
  const roster = document.getElementById('roster');
  roster.innerHTML = 'Loading...';
  try {
    const data = await getJson(`/api/players?team=${team}&year=${year}`);
    let html = `<h2>${data.team} — ${data.year}</h2>`;
    for (const [title, rows] of [['Batters', data.batters], ['Pitchers', data.pitchers]]) {
      html += `<h3>${title}</h3><table><tbody>`;
      for (const p of rows) {
        html += `<tr class="selectable" onclick="analyze('${p.name.replace(/'/g, "\\'")}', ${year}, '${p.type}')">` +
                `<td>${p.name}</td><td>G: ${p.games}</td></tr>`;
      }
      html += '</tbody></table>';
    }
    roster.innerHTML = html;
  } catch (e) {
    roster.innerHTML = `<p class="error">${e.message}</p>`;
  }
}

async function analyze(name, year, type) {
  const panel = document.getElementById('analysis');
  panel.innerHTML = `Analyzing ${name}...`;
  try {
    const stats = await getJson(`/api/player-stats?name=${encodeURIComponent(name)}&year=${year}&type=${type}`);
    const result = await getJson('/api/analyze', {
      method: 'POST',
      headers: {'Content-Type': 'application/json'},
      body: JSON.stringify(stats),
    });
    const grade = result.grade || '?';
    panel.innerHTML = `<h2>${name} — ${year}</h2>` +
      `<div class="grade">Grade: ${grade}</div>` +
      `<p>${result.grade_text}</p><hr>` +
      `<div>${result.summary}</div>`;
  } catch (e) {
    panel.innerHTML = `<p class="error">${e.message}</p>`;
  }
}
</script>
</body>
</html>"#;

/// GET /
pub async fn index() -> Html<String> {
    let team_options: String = catalog::teams_by_display_name()
        .iter()
        .map(|(code, name)| format!("<option value=\"{code}\">{name}</option>"))
        .collect();
    let year_options: String = catalog::supported_years()
        .iter()
        .map(|year| format!("<option value=\"{year}\">{year}</option>"))
        .collect();

    Html(
        INDEX_TEMPLATE
            .replace("{{TEAM_OPTIONS}}", &team_options)
            .replace("{{YEAR_OPTIONS}}", &year_options),
    )
}
