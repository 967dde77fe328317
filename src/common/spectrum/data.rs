//! Raw colorimetric data: CIE 1931 matching functions sampled at 5 nm
//! intervals, and RGB up-sampling basis functions pre-resampled to the
//! renderer's native spectral resolution.

use super::SPECTRAL_SAMPLES;

pub const N_CIE_SAMPLES: usize = 81;

pub const CIE_LAMBDA: [f32; N_CIE_SAMPLES] = [
    3.800000000e+02, 3.850000000e+02, 3.900000000e+02, 3.950000000e+02,
    4.000000000e+02, 4.050000000e+02, 4.100000000e+02, 4.150000000e+02,
    4.200000000e+02, 4.250000000e+02, 4.300000000e+02, 4.350000000e+02,
    4.400000000e+02, 4.450000000e+02, 4.500000000e+02, 4.550000000e+02,
    4.600000000e+02, 4.650000000e+02, 4.700000000e+02, 4.750000000e+02,
    4.800000000e+02, 4.850000000e+02, 4.900000000e+02, 4.950000000e+02,
    5.000000000e+02, 5.050000000e+02, 5.100000000e+02, 5.150000000e+02,
    5.200000000e+02, 5.250000000e+02, 5.300000000e+02, 5.350000000e+02,
    5.400000000e+02, 5.450000000e+02, 5.500000000e+02, 5.550000000e+02,
    5.600000000e+02, 5.650000000e+02, 5.700000000e+02, 5.750000000e+02,
    5.800000000e+02, 5.850000000e+02, 5.900000000e+02, 5.950000000e+02,
    6.000000000e+02, 6.050000000e+02, 6.100000000e+02, 6.150000000e+02,
    6.200000000e+02, 6.250000000e+02, 6.300000000e+02, 6.350000000e+02,
    6.400000000e+02, 6.450000000e+02, 6.500000000e+02, 6.550000000e+02,
    6.600000000e+02, 6.650000000e+02, 6.700000000e+02, 6.750000000e+02,
    6.800000000e+02, 6.850000000e+02, 6.900000000e+02, 6.950000000e+02,
    7.000000000e+02, 7.050000000e+02, 7.100000000e+02, 7.150000000e+02,
    7.200000000e+02, 7.250000000e+02, 7.300000000e+02, 7.350000000e+02,
    7.400000000e+02, 7.450000000e+02, 7.500000000e+02, 7.550000000e+02,
    7.600000000e+02, 7.650000000e+02, 7.700000000e+02, 7.750000000e+02,
    7.800000000e+02,
];

pub const CIE_X: [f32; N_CIE_SAMPLES] = [
    1.368000000e-03, 2.236000000e-03, 4.243000000e-03, 7.650000000e-03,
    1.431000000e-02, 2.319000000e-02, 4.351000000e-02, 7.763000000e-02,
    1.343800000e-01, 2.147700000e-01, 2.839000000e-01, 3.285000000e-01,
    3.482800000e-01, 3.480600000e-01, 3.362000000e-01, 3.187000000e-01,
    2.908000000e-01, 2.511000000e-01, 1.953600000e-01, 1.421000000e-01,
    9.564000000e-02, 5.795000000e-02, 3.201000000e-02, 1.470000000e-02,
    4.900000000e-03, 2.400000000e-03, 9.300000000e-03, 2.910000000e-02,
    6.327000000e-02, 1.096000000e-01, 1.655000000e-01, 2.257500000e-01,
    2.904000000e-01, 3.597000000e-01, 4.334500000e-01, 5.120500000e-01,
    5.945000000e-01, 6.784000000e-01, 7.621000000e-01, 8.425000000e-01,
    9.163000000e-01, 9.786000000e-01, 1.026300000e+00, 1.056700000e+00,
    1.062200000e+00, 1.045600000e+00, 1.002600000e+00, 9.384000000e-01,
    8.544500000e-01, 7.514000000e-01, 6.424000000e-01, 5.419000000e-01,
    4.479000000e-01, 3.608000000e-01, 2.835000000e-01, 2.187000000e-01,
    1.649000000e-01, 1.212000000e-01, 8.740000000e-02, 6.360000000e-02,
    4.677000000e-02, 3.290000000e-02, 2.270000000e-02, 1.584000000e-02,
    1.135900000e-02, 8.111000000e-03, 5.790000000e-03, 4.109000000e-03,
    2.899000000e-03, 2.049000000e-03, 1.440000000e-03, 1.000000000e-03,
    6.900000000e-04, 4.760000000e-04, 3.320000000e-04, 2.350000000e-04,
    1.660000000e-04, 1.170000000e-04, 8.300000000e-05, 5.900000000e-05,
    4.200000000e-05,
];

pub const CIE_Y: [f32; N_CIE_SAMPLES] = [
    3.900000000e-05, 6.400000000e-05, 1.200000000e-04, 2.170000000e-04,
    3.960000000e-04, 6.400000000e-04, 1.210000000e-03, 2.180000000e-03,
    4.000000000e-03, 7.300000000e-03, 1.160000000e-02, 1.684000000e-02,
    2.300000000e-02, 2.980000000e-02, 3.800000000e-02, 4.800000000e-02,
    6.000000000e-02, 7.390000000e-02, 9.098000000e-02, 1.126000000e-01,
    1.390200000e-01, 1.693000000e-01, 2.080200000e-01, 2.586000000e-01,
    3.230000000e-01, 4.073000000e-01, 5.030000000e-01, 6.082000000e-01,
    7.100000000e-01, 7.932000000e-01, 8.620000000e-01, 9.148500000e-01,
    9.540000000e-01, 9.803000000e-01, 9.949500000e-01, 1.000000000e+00,
    9.950000000e-01, 9.786000000e-01, 9.520000000e-01, 9.154000000e-01,
    8.700000000e-01, 8.163000000e-01, 7.570000000e-01, 6.949000000e-01,
    6.310000000e-01, 5.668000000e-01, 5.030000000e-01, 4.412000000e-01,
    3.810000000e-01, 3.210000000e-01, 2.650000000e-01, 2.170000000e-01,
    1.750000000e-01, 1.382000000e-01, 1.070000000e-01, 8.160000000e-02,
    6.100000000e-02, 4.458000000e-02, 3.200000000e-02, 2.320000000e-02,
    1.700000000e-02, 1.192000000e-02, 8.210000000e-03, 5.723000000e-03,
    4.102000000e-03, 2.929000000e-03, 2.091000000e-03, 1.484000000e-03,
    1.047000000e-03, 7.400000000e-04, 5.200000000e-04, 3.610000000e-04,
    2.490000000e-04, 1.720000000e-04, 1.200000000e-04, 8.500000000e-05,
    6.000000000e-05, 4.200000000e-05, 3.000000000e-05, 2.100000000e-05,
    1.500000000e-05,
];

pub const CIE_Z: [f32; N_CIE_SAMPLES] = [
    6.450000000e-03, 1.055000000e-02, 2.005000000e-02, 3.621000000e-02,
    6.785000000e-02, 1.102000000e-01, 2.074000000e-01, 3.713000000e-01,
    6.456000000e-01, 1.039050000e+00, 1.385600000e+00, 1.622960000e+00,
    1.747060000e+00, 1.782600000e+00, 1.772110000e+00, 1.744100000e+00,
    1.669200000e+00, 1.528100000e+00, 1.287640000e+00, 1.041900000e+00,
    8.129500000e-01, 6.162000000e-01, 4.651800000e-01, 3.533000000e-01,
    2.720000000e-01, 2.123000000e-01, 1.582000000e-01, 1.117000000e-01,
    7.825000000e-02, 5.725000000e-02, 4.216000000e-02, 2.984000000e-02,
    2.030000000e-02, 1.340000000e-02, 8.750000000e-03, 5.750000000e-03,
    3.900000000e-03, 2.750000000e-03, 2.100000000e-03, 1.800000000e-03,
    1.650000000e-03, 1.400000000e-03, 1.100000000e-03, 1.000000000e-03,
    8.000000000e-04, 6.000000000e-04, 3.400000000e-04, 2.400000000e-04,
    1.900000000e-04, 1.000000000e-04, 5.000000000e-05, 3.000000000e-05,
    2.000000000e-05, 1.000000000e-05, 0.000000000e+00, 0.000000000e+00,
    0.000000000e+00, 0.000000000e+00, 0.000000000e+00, 0.000000000e+00,
    0.000000000e+00, 0.000000000e+00, 0.000000000e+00, 0.000000000e+00,
    0.000000000e+00, 0.000000000e+00, 0.000000000e+00, 0.000000000e+00,
    0.000000000e+00, 0.000000000e+00, 0.000000000e+00, 0.000000000e+00,
    0.000000000e+00, 0.000000000e+00, 0.000000000e+00, 0.000000000e+00,
    0.000000000e+00, 0.000000000e+00, 0.000000000e+00, 0.000000000e+00,
    0.000000000e+00,
];

pub const RGB_REFL2_SPECT_WHITE: [f32; SPECTRAL_SAMPLES] = [
    1.083362649e+00, 1.084623806e+00, 1.085884566e+00, 1.087143911e+00,
    1.088399781e+00, 1.089648372e+00, 1.090883082e+00, 1.092093367e+00,
    1.093263873e+00, 1.094373975e+00, 1.095397659e+00, 1.096303661e+00,
    1.097055749e+00, 1.097613151e+00, 1.097931176e+00, 1.097962114e+00,
    1.097656296e+00, 1.096963170e+00, 1.095832305e+00, 1.094214328e+00,
    1.092061823e+00, 1.089330260e+00, 1.085979015e+00, 1.081972477e+00,
    1.077281151e+00, 1.071882647e+00, 1.065762376e+00, 1.058913941e+00,
    1.051339260e+00, 1.043048466e+00, 1.034059606e+00, 1.024398135e+00,
    1.014096244e+00, 1.003192014e+00, 9.917284252e-01, 9.797522195e-01,
    9.673126723e-01, 9.544602978e-01, 9.412455510e-01, 9.277175833e-01,
    9.139231166e-01, 8.999055105e-01, 8.857040646e-01, 8.713535752e-01,
    8.568841560e-01, 8.423212950e-01, 8.276861253e-01, 8.129958527e-01,
    7.982642406e-01, 7.835020991e-01, 7.687177699e-01, 7.539175881e-01,
    7.391062937e-01, 7.242873833e-01, 7.094634034e-01, 6.946361875e-01,
    6.798070325e-01, 6.649768249e-01, 6.501461365e-01, 6.353153000e-01,
];

pub const RGB_REFL2_SPECT_CYAN: [f32; SPECTRAL_SAMPLES] = [
    7.367108579e-01, 7.721044925e-01, 8.074947126e-01, 8.428720887e-01,
    8.782163384e-01, 9.134882833e-01, 9.486178270e-01, 9.834910908e-01,
    1.017941074e+00, 1.051743064e+00, 1.084614356e+00, 1.116217127e+00,
    1.146163280e+00, 1.174021171e+00, 1.199324693e+00, 1.221585242e+00,
    1.240305470e+00, 1.254992906e+00, 1.265172850e+00, 1.270400455e+00,
    1.270272776e+00, 1.264441715e+00, 1.252628678e+00, 1.234640391e+00,
    1.210384216e+00, 1.179881035e+00, 1.143273209e+00, 1.100827064e+00,
    1.052931011e+00, 1.000089938e+00, 9.429161036e-01, 8.821167554e-01,
    8.184787102e-01, 7.528501366e-01, 6.861197386e-01, 6.191937842e-01,
    5.529716453e-01, 4.883207021e-01, 4.260516947e-01, 3.668957263e-01,
    3.114840874e-01, 2.603324219e-01, 2.138300104e-01, 1.722345453e-01,
    1.356725121e-01, 1.041445383e-01, 7.753530228e-02, 5.562666630e-02,
    3.811164372e-02, 2.460797798e-02, 1.467125361e-02, 7.807128176e-03,
    3.482108319e-03, 1.132659555e-03, 1.727695996e-04, 2.480822624e-19,
    0.000000000e+00, 0.000000000e+00, 0.000000000e+00, 0.000000000e+00,
];

pub const RGB_REFL2_SPECT_MAGENTA: [f32; SPECTRAL_SAMPLES] = [
    1.891935964e+00, 1.800686309e+00, 1.709439574e+00, 1.618204039e+00,
    1.526997876e+00, 1.435856724e+00, 1.344845091e+00, 1.254068733e+00,
    1.163683976e+00, 1.073902813e+00, 9.849941820e-01, 8.972825358e-01,
    8.111448677e-01, 7.270062159e-01, 6.453330035e-01, 5.666235044e-01,
    4.913964424e-01, 4.201795998e-01, 3.534990611e-01, 2.918693166e-01,
    2.357837710e-01, 1.857049985e-01, 1.420540679e-01, 1.051990393e-01,
    7.544349601e-02, 5.301634184e-02, 3.806457944e-02, 3.064943364e-02,
    3.074516475e-02, 3.824022206e-02, 5.294056332e-02, 7.457501347e-02,
    1.028024684e-01, 1.372208054e-01, 1.773774155e-01, 2.227811399e-01,
    2.729152556e-01, 3.272510700e-01, 3.852615592e-01, 4.464344094e-01,
    5.102838032e-01, 5.763601441e-01, 6.442572991e-01, 7.136171407e-01,
    7.841312980e-01, 8.555404130e-01, 9.276311289e-01, 1.000231429e+00,
    1.073205380e+00, 1.146447848e+00, 1.219879276e+00, 1.293440717e+00,
    1.367089412e+00, 1.440795021e+00, 1.514536475e+00, 1.588299442e+00,
    1.662074435e+00, 1.735855472e+00, 1.809639050e+00, 1.883423347e+00,
];

pub const RGB_REFL2_SPECT_YELLOW: [f32; SPECTRAL_SAMPLES] = [
    -0.000000000e+00, 8.786725985e-17, 1.115546098e-16, 0.000000000e+00,
    0.000000000e+00, 3.171526608e-04, 2.812128746e-03, 9.116212422e-03,
    2.057716222e-02, 3.822682641e-02, 6.276848498e-02, 9.457760854e-02,
    1.337094024e-01, 1.799131621e-01, 2.326577683e-01, 2.911730161e-01,
    3.545011071e-01, 4.215474847e-01, 4.911274804e-01, 5.620065011e-01,
    6.329341171e-01, 7.026741943e-01, 7.700334411e-01, 8.338898827e-01,
    8.932207101e-01, 9.471268538e-01, 9.948508429e-01, 1.035787696e+00,
    1.069490566e+00, 1.095671901e+00, 1.114200456e+00, 1.125094414e+00,
    1.128511047e+00, 1.124733216e+00, 1.114152899e+00, 1.097252104e+00,
    1.074581785e+00, 1.046739473e+00, 1.014346568e+00, 9.780263435e-01,
    9.383837546e-01, 8.959883654e-01, 8.513610984e-01, 8.049651788e-01,
    7.572014400e-01, 7.084075408e-01, 6.588607294e-01, 6.087832325e-01,
    5.583487542e-01, 5.076892350e-01, 4.569017009e-01, 4.060548749e-01,
    3.551951333e-01, 3.043516151e-01, 2.535405116e-01, 2.027685249e-01,
    1.520354589e-01, 1.013360571e-01, 5.066139856e-02, 0.000000000e+00,
];

pub const RGB_REFL2_SPECT_RED: [f32; SPECTRAL_SAMPLES] = [
    6.535154010e-02, 6.026797029e-02, 5.518556408e-02, 5.010754220e-02,
    4.504082685e-02, 3.999870021e-02, 3.500452486e-02, 3.009519442e-02,
    2.532265359e-02, 2.075304429e-02, 1.646371674e-02, 1.253840924e-02,
    9.060846107e-03, 6.106808511e-03, 3.734790845e-03, 1.975283088e-03,
    8.188218341e-04, 2.031921627e-04, 3.873891919e-21, 3.297082730e-18,
    8.615915015e-20, 1.431119155e-17, 3.083619792e-17, 3.304391695e-18,
    0.000000000e+00, 0.000000000e+00, 3.166705874e-17, 1.120399172e-03,
    4.981780662e-03, 1.291041200e-02, 2.594259936e-02, 4.483475985e-02,
    7.007863342e-02, 1.019212746e-01, 1.403897649e-01, 1.853201859e-01,
    2.363900043e-01, 2.931528162e-01, 3.550741210e-01, 4.215665267e-01,
    4.920226126e-01, 5.658434514e-01, 6.424617228e-01, 7.213588106e-01,
    8.020755543e-01, 8.842172442e-01, 9.674534684e-01, 1.051514060e+00,
    1.136183062e+00, 1.221291876e+00, 1.306711919e+00, 1.392347285e+00,
    1.478127988e+00, 1.564004076e+00, 1.649940647e+00, 1.735913799e+00,
    1.821907582e+00, 1.907911840e+00, 1.993920555e+00, 2.079930547e+00,
];

pub const RGB_REFL2_SPECT_GREEN: [f32; SPECTRAL_SAMPLES] = [
    -0.000000000e+00, 0.000000000e+00, 9.442527051e-17, 8.111149144e-19,
    0.000000000e+00, 3.078567239e-16, 6.159921248e-16, 0.000000000e+00,
    0.000000000e+00, 1.484142688e-03, 1.032047680e-02, 3.075505984e-02,
    6.545256136e-02, 1.155710733e-01, 1.808919745e-01, 2.600272925e-01,
    3.506760283e-01, 4.498758450e-01, 5.542328323e-01, 6.601181397e-01,
    7.638333446e-01, 8.617552452e-01, 9.504712894e-01, 1.026912030e+00,
    1.088476719e+00, 1.133138651e+00, 1.159514156e+00, 1.166894800e+00,
    1.155252235e+00, 1.125220252e+00, 1.078055532e+00, 1.015578334e+00,
    9.400950747e-01, 8.543043772e-01, 7.611879961e-01, 6.638891791e-01,
    5.655821441e-01, 4.693373385e-01, 3.779884081e-01, 2.940073885e-01,
    2.193943628e-01, 1.555897287e-01, 1.034133164e-01, 6.303239740e-02,
    3.395920528e-02, 1.507461343e-02, 4.675841468e-03, 5.412617124e-04,
    0.000000000e+00, 6.097105062e-19, 0.000000000e+00, 0.000000000e+00,
    0.000000000e+00, 1.672779899e-19, 0.000000000e+00, 0.000000000e+00,
    0.000000000e+00, 5.091118923e-20, 1.025134825e-19, 0.000000000e+00,
];

pub const RGB_REFL2_SPECT_BLUE: [f32; SPECTRAL_SAMPLES] = [
    1.780056607e+00, 1.698323752e+00, 1.616593193e+00, 1.534871460e+00,
    1.453172936e+00, 1.371525884e+00, 1.289981526e+00, 1.208623871e+00,
    1.127577074e+00, 1.047009381e+00, 9.671339902e-01, 8.882077269e-01,
    8.105284386e-01, 7.344311024e-01, 6.602820763e-01, 5.884708371e-01,
    5.193999276e-01, 4.534746038e-01, 3.910927155e-01, 3.326349255e-01,
    2.784547201e-01, 2.288675587e-01, 1.841383921e-01, 1.444676107e-01,
    1.099762807e-01, 8.069198631e-02, 5.653737777e-02, 3.732202959e-02,
    2.273708102e-02, 1.235241131e-02, 5.616128606e-03, 1.856217993e-03,
    2.841067590e-04, 1.327957978e-19, 0.000000000e+00, 0.000000000e+00,
    0.000000000e+00, 1.797372367e-06, 1.280190901e-04, 4.513266362e-04,
    1.006038734e-03, 1.798688305e-03, 2.817166279e-03, 4.038239038e-03,
    5.433299821e-03, 6.972487650e-03, 8.627376139e-03, 1.037251431e-02,
    1.218616147e-02, 1.405048279e-02, 1.595136002e-02, 1.787795710e-02,
    1.982218301e-02, 2.177815146e-02, 2.374167740e-02, 2.570984520e-02,
    2.768067472e-02, 2.965287970e-02, 3.162568115e-02, 3.359865693e-02,
];

pub const RGB_ILLUM2_SPECT_WHITE: [f32; SPECTRAL_SAMPLES] = [
    8.652875528e-01, 9.093699088e-01, 9.361480611e-01, 9.456436461e-01,
    9.330227188e-01, 8.983142848e-01, 9.269692095e-01, 1.018905495e+00,
    1.095430683e+00, 1.156570314e+00, 1.188907919e+00, 1.192477815e+00,
    1.186535110e+00, 1.171099761e+00, 1.165852480e+00, 1.170779540e+00,
    1.155045489e+00, 1.118675925e+00, 1.101708040e+00, 1.104130481e+00,
    1.101294485e+00, 1.093201767e+00, 1.081463892e+00, 1.066083697e+00,
    1.065671382e+00, 1.080227566e+00, 1.079217608e+00, 1.062637664e+00,
    1.053480153e+00, 1.051748331e+00, 1.040744690e+00, 1.020457345e+00,
    1.001153853e+00, 9.828298716e-01, 9.724039821e-01, 9.698773093e-01,
    9.507880766e-01, 9.151194515e-01, 9.007474163e-01, 9.076866004e-01,
    9.102591685e-01, 9.084597588e-01, 9.028764975e-01, 8.935042965e-01,
    8.777634123e-01, 8.556485714e-01, 8.457404222e-01, 8.480484713e-01,
    8.399959341e-01, 8.215750450e-01, 8.129389812e-01, 8.140957019e-01,
    8.200128739e-01, 8.306944268e-01, 8.259917257e-01, 8.058939785e-01,
    7.741711462e-01, 7.308157035e-01, 7.140159555e-01, 7.237906306e-01,
];

pub const RGB_ILLUM2_SPECT_CYAN: [f32; SPECTRAL_SAMPLES] = [
    5.737856220e-01, 6.322336147e-01, 6.809512348e-01, 7.182813895e-01,
    7.387152037e-01, 7.401149261e-01, 7.934507002e-01, 9.046511770e-01,
    1.007222274e+00, 1.099455861e+00, 1.166390271e+00, 1.205024135e+00,
    1.232413840e+00, 1.247357048e+00, 1.270144708e+00, 1.301024784e+00,
    1.305246206e+00, 1.281314739e+00, 1.274514384e+00, 1.285247657e+00,
    1.284729707e+00, 1.272609862e+00, 1.250629377e+00, 1.218861683e+00,
    1.198527625e+00, 1.188796724e+00, 1.155757058e+00, 1.101026749e+00,
    1.049727006e+00, 1.001548716e+00, 9.409692102e-01, 8.700451898e-01,
    7.992586146e-01, 7.292906288e-01, 6.655262666e-01, 6.073595061e-01,
    5.402304610e-01, 4.676495087e-01, 4.101842236e-01, 3.647630337e-01,
    3.194868905e-01, 2.754401993e-01, 2.336978218e-01, 1.949281460e-01,
    1.591587679e-01, 1.269673564e-01, 1.009290777e-01, 7.979283133e-02,
    6.089760348e-02, 4.466506610e-02, 3.207550282e-02, 2.238906447e-02,
    1.493080408e-02, 9.355456197e-03, 5.234606768e-03, 2.495062390e-03,
    9.238310073e-04, 2.040250568e-04, 0.000000000e+00, 0.000000000e+00,
];

pub const RGB_ILLUM2_SPECT_MAGENTA: [f32; SPECTRAL_SAMPLES] = [
    1.571637014e+00, 1.570524475e+00, 1.533131640e+00, 1.464131413e+00,
    1.361121830e+00, 1.230110671e+00, 1.186450828e+00, 1.213150154e+00,
    1.206780228e+00, 1.171786328e+00, 1.100252883e+00, 1.000264110e+00,
    8.942880128e-01, 7.852794794e-01, 6.877112067e-01, 5.997165320e-01,
    5.061414144e-01, 4.120712353e-01, 3.341368378e-01, 2.689364513e-01,
    2.089740722e-01, 1.556071800e-01, 1.100905572e-01, 7.305169039e-02,
    4.565584384e-02, 2.699865885e-02, 1.632039490e-02, 1.410735774e-02,
    2.043805880e-02, 3.507290605e-02, 5.711145776e-02, 8.537252312e-02,
    1.194425617e-01, 1.585758423e-01, 2.034998602e-01, 2.546383643e-01,
    3.048204581e-01, 3.503603829e-01, 4.042250148e-01, 4.699868399e-01,
    5.365155590e-01, 6.024691120e-01, 6.669299856e-01, 7.286864524e-01,
    7.842520916e-01, 8.318654888e-01, 8.893351839e-01, 9.594197917e-01,
    1.017584857e+00, 1.061242253e+00, 1.115477041e+00, 1.182613865e+00,
    1.257270021e+00, 1.340579703e+00, 1.399539154e+00, 1.430400244e+00,
    1.436432257e+00, 1.414811096e+00, 1.439732429e+00, 1.517645553e+00,
];

pub const RGB_ILLUM2_SPECT_YELLOW: [f32; SPECTRAL_SAMPLES] = [
    -0.000000000e+00, 0.000000000e+00, 0.000000000e+00, 0.000000000e+00,
    4.488675540e-18, 0.000000000e+00, 1.188053044e-03, 5.643466771e-03,
    1.559348477e-02, 3.302136515e-02, 5.867259537e-02, 9.201043316e-02,
    1.330906948e-01, 1.806302592e-01, 2.366018165e-01, 3.015851721e-01,
    3.665069429e-01, 4.262880457e-01, 4.932758167e-01, 5.698998410e-01,
    6.443876831e-01, 7.143578094e-01, 7.786780418e-01, 8.355440109e-01,
    8.990708583e-01, 9.710295698e-01, 1.023927528e+00, 1.054841456e+00,
    1.085273178e+00, 1.115957596e+00, 1.129373361e+00, 1.125083928e+00,
    1.114597821e+00, 1.098584930e+00, 1.085478274e+00, 1.075855142e+00,
    1.043233429e+00, 9.889667065e-01, 9.549863149e-01, 9.406616677e-01,
    9.189605016e-01, 8.906496150e-01, 8.570827096e-01, 8.189905571e-01,
    7.748071099e-01, 7.254740690e-01, 6.870039118e-01, 6.582802209e-01,
    6.214014193e-01, 5.775969179e-01, 5.415156669e-01, 5.121349025e-01,
    4.854248251e-01, 4.608833025e-01, 4.275672944e-01, 3.872000253e-01,
    3.431779251e-01, 2.967985965e-01, 2.634503806e-01, 2.401805667e-01,
];

pub const RGB_ILLUM2_SPECT_RED: [f32; SPECTRAL_SAMPLES] = [
    5.982821920e-02, 5.777216434e-02, 5.421585457e-02, 4.945548756e-02,
    4.356481866e-02, 3.693211670e-02, 3.299103131e-02, 3.074227088e-02,
    2.730251187e-02, 2.305353347e-02, 1.819041721e-02, 1.328103972e-02,
    8.962085238e-03, 5.433825788e-03, 2.864862070e-03, 1.187109897e-03,
    2.854085980e-04, 1.752834134e-21, 1.293958553e-17, 0.000000000e+00,
    0.000000000e+00, 1.546068920e-16, 0.000000000e+00, 0.000000000e+00,
    0.000000000e+00, 3.358427380e-16, 2.758809768e-16, 7.294045604e-18,
    2.085040758e-03, 8.493683626e-03, 2.078128035e-02, 3.968475896e-02,
    6.573505082e-02, 9.899164544e-02, 1.402073624e-01, 1.899848617e-01,
    2.428485079e-01, 2.948563510e-01, 3.562856151e-01, 4.308449093e-01,
    5.086188112e-01, 5.878291032e-01, 6.670639398e-01, 7.446215313e-01,
    8.164323458e-01, 8.801109061e-01, 9.542842915e-01, 1.042293789e+00,
    1.117569338e+00, 1.176761826e+00, 1.247477406e+00, 1.332626240e+00,
    1.426394231e+00, 1.530204993e+00, 1.606308361e+00, 1.649922611e+00,
    1.664399430e+00, 1.646137780e+00, 1.681491465e+00, 1.778672796e+00,
];

pub const RGB_ILLUM2_SPECT_GREEN: [f32; SPECTRAL_SAMPLES] = [
    -0.000000000e+00, 0.000000000e+00, 1.470278128e-17, 7.015400574e-19,
    2.896409552e-17, 0.000000000e+00, 0.000000000e+00, 0.000000000e+00,
    0.000000000e+00, 1.255125919e-16, 7.013723834e-03, 2.650427931e-02,
    6.159166844e-02, 1.128260308e-01, 1.813160267e-01, 2.672549771e-01,
    3.609425144e-01, 4.535327429e-01, 5.550975661e-01, 6.672885102e-01,
    7.746821674e-01, 8.719705781e-01, 9.557098905e-01, 1.022133540e+00,
    1.087317895e+00, 1.151931786e+00, 1.182403137e+00, 1.176638880e+00,
    1.160193963e+00, 1.133968879e+00, 1.081338746e+00, 1.005544798e+00,
    9.204188083e-01, 8.288228502e-01, 7.388767159e-01, 6.515119046e-01,
    5.531578686e-01, 4.508462194e-01, 3.664837353e-01, 2.964529747e-01,
    2.309433595e-01, 1.722372977e-01, 1.220322817e-01, 8.114514527e-02,
    4.956089689e-02, 2.696433431e-02, 1.264180635e-02, 4.551271650e-03,
    8.814119706e-04, 0.000000000e+00, 0.000000000e+00, 0.000000000e+00,
    6.111177239e-20, 7.972535156e-20, 7.308883059e-20, 1.841533971e-20,
    0.000000000e+00, 0.000000000e+00, 0.000000000e+00, 0.000000000e+00,
];

pub const RGB_ILLUM2_SPECT_BLUE: [f32; SPECTRAL_SAMPLES] = [
    1.449882308e+00, 1.453686115e+00, 1.424308555e+00, 1.365783952e+00,
    1.275515113e+00, 1.158686927e+00, 1.124078760e+00, 1.156998896e+00,
    1.159658968e+00, 1.135864610e+00, 1.077299477e+00, 9.909091358e-01,
    8.981103552e-01, 8.014090082e-01, 7.153126529e-01, 6.380947053e-01,
    5.534186020e-01, 4.657256644e-01, 3.933009959e-01, 3.329457798e-01,
    2.757019929e-01, 2.226930398e-01, 1.750906267e-01, 1.333881966e-01,
    9.960631468e-02, 7.232248138e-02, 4.906127241e-02, 3.056376087e-02,
    1.737792438e-02, 8.591836609e-03, 3.290771849e-03, 7.427112987e-04,
    7.387651388e-20, 0.000000000e+00, 0.000000000e+00, 0.000000000e+00,
    1.026761673e-04, 4.143729323e-04, 9.976698070e-04, 1.909139466e-03,
    3.131290315e-03, 4.629912379e-03, 6.354757722e-03, 8.242729465e-03,
    1.019536556e-02, 1.212350582e-02, 1.425132827e-02, 1.664770856e-02,
    1.888594841e-02, 2.085894073e-02, 2.303204296e-02, 2.548134758e-02,
    2.811443328e-02, 3.096916309e-02, 3.327331581e-02, 3.488537057e-02,
    3.583935086e-02, 3.602902647e-02, 3.734644643e-02, 4.003180498e-02,
];
